use clap::Parser;
use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use treasure_hunter::game::MENU;
use treasure_hunter::{build_info, logging, Action, Game, GameMode, Hunter, MenuChoice, Shop, ShopIntent};

/// Treasure Hunter - travel from town to town and collect the crown, the trophy and the gem.
#[derive(Debug, Parser)]
#[command(name = "treasure-hunter", disable_version_flag = true)]
struct Args {
    /// Hunter name (asked for if omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// Difficulty (asked for if omitted)
    #[arg(short, long, value_enum)]
    mode: Option<GameMode>,

    /// Seed the random source for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log game events to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print the hunter as JSON when the game ends
    #[arg(long)]
    json: bool,

    /// Show version information
    #[arg(short = 'V', long)]
    version: bool,
}

/// Prints `question` and reads one trimmed line. `None` on end of input.
fn prompt(input: &mut impl BufRead, question: &str) -> io::Result<Option<String>> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Colours `Hunter::info_string`: the purse line in yellow, listed items in magenta.
fn hunter_status(hunter: &Hunter) -> String {
    hunter
        .info_string()
        .lines()
        .enumerate()
        .map(|(i, line)| match line.split_once(": ") {
            _ if i == 0 => line.yellow().to_string(),
            Some((label, items)) if items != "none" => format!("{}: {}", label, items.magenta()),
            _ => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if args.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }
    logging::init(args.verbose);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Welcome to {}!", "TREASURE HUNTER".cyan());
    println!("Going hunting for the big treasure, eh?");

    let name = match args.name {
        Some(name) => name,
        None => prompt(&mut input, "What's your name, Hunter? ")?
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "hunter".to_string()),
    };
    let mode = match args.mode {
        Some(mode) => mode,
        None => {
            let question = format!(
                "{}, {}, or {}? (e/n/h) ",
                "Easy".green(),
                "Normal".white(),
                "Hard Mode".red()
            );
            GameMode::from_prompt(&prompt(&mut input, &question)?.unwrap_or_default())
        }
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(&name, mode, &mut rng);
    let mut news = game.town().latest_news().to_string();

    loop {
        println!();
        println!("{}", news);
        println!("***");
        println!("{}\n", hunter_status(game.hunter()));
        println!("{}\n", game.town().info_string().white());
        for line in MENU {
            println!("{}", line);
        }
        println!();

        let choice = match prompt(&mut input, "What's your next move? ")? {
            Some(answer) => MenuChoice::parse(&answer),
            None => MenuChoice::Exit,
        };

        let item = match choice.shop_intent() {
            Some(intent) => {
                println!("{}", game.town().shop().catalog(intent));
                let question = match intent {
                    ShopIntent::Buy => "What're you lookin' to buy? ",
                    ShopIntent::Sell => "What're you lookin' to sell? ",
                };
                prompt(&mut input, question)?
            }
            None => None,
        };

        let turn = game.process(Action::from_choice(choice, item.as_deref()), &mut rng);
        news = turn.messages.join("\n");
        if turn.status.is_over() {
            println!("{}", news.as_str().cyan());
            break;
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(game.hunter())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        println!("{}", json);
    }
    Ok(())
}
