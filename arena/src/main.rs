use std::{
    collections::HashMap,
    io::{self, BufRead, Write},
};

use clap::{Parser, ValueEnum};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blokus::{
    board::{Board, Cell},
    moves::Move,
    pieces::PieceType,
    policy::{CornerPolicy, GreedyPolicy, Policy, PotentialPolicy, RandomPolicy, ShyPolicy},
    Colour,
};

/// Turn order used by the arena: the classic seating, not the enum order.
const TURN_ORDER: [Colour; 4] = [Colour::Red, Colour::Blue, Colour::Green, Colour::Yellow];

#[derive(Parser)]
#[command(
    name = "blokus-arena",
    version,
    about = "Runs Blokus matches between bots, optionally with one human seat."
)]
struct Args {
    /// Edge length of the square board.
    #[arg(long, default_value_t = 20)]
    dimension: usize,

    /// Seed for every randomised decision; a random seed is drawn when
    /// omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Policy for the red seat.
    #[arg(long, value_enum, default_value_t = Style::Random)]
    red: Style,

    /// Policy for the blue seat.
    #[arg(long, value_enum, default_value_t = Style::Random)]
    blue: Style,

    /// Policy for the green seat.
    #[arg(long, value_enum, default_value_t = Style::Random)]
    green: Style,

    /// Policy for the yellow seat.
    #[arg(long, value_enum, default_value_t = Style::Random)]
    yellow: Style,

    /// Take one seat yourself instead of its bot.
    #[arg(long, value_parser = parse_colour)]
    human: Option<Colour>,

    /// Suppress the board rendering between rounds.
    #[arg(long)]
    quiet: bool,
}

fn parse_colour(value: &str) -> Result<Colour, String> {
    value
        .parse()
        .map_err(|_| format!("unknown colour \"{value}\", choose red, blue, green, or yellow"))
}

/// The selectable bot styles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Style {
    /// Any legal move, uniformly.
    Random,
    /// Largest piece first.
    Greedy,
    /// Smallest piece first.
    Shy,
    /// Maximize the corners opened for future moves.
    Corner,
    /// Maximize the number of follow-up moves.
    Potential,
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Style::Random => "random",
            Style::Greedy => "greedy",
            Style::Shy => "shy",
            Style::Corner => "corner",
            Style::Potential => "potential",
        };
        f.pad(name)
    }
}

impl Style {
    fn build(self, seed: u64) -> Box<dyn Policy> {
        match self {
            Style::Random => Box::new(RandomPolicy::seeded(seed)),
            Style::Greedy => Box::new(GreedyPolicy::seeded(seed)),
            Style::Shy => Box::new(ShyPolicy::seeded(seed)),
            Style::Corner => Box::new(CornerPolicy::seeded(seed)),
            Style::Potential => Box::new(PotentialPolicy::seeded(seed)),
        }
    }
}

enum Seat {
    Bot(Box<dyn Policy>),
    Human,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, dimension = args.dimension, "starting match");

    let mut seat_rng = StdRng::seed_from_u64(seed);
    let mut seats: HashMap<Colour, Seat> = HashMap::new();
    for colour in TURN_ORDER {
        let seat = if args.human == Some(colour) {
            Seat::Human
        } else {
            let style = match colour {
                Colour::Red => args.red,
                Colour::Blue => args.blue,
                Colour::Green => args.green,
                Colour::Yellow => args.yellow,
            };
            Seat::Bot(style.build(seat_rng.gen()))
        };
        seats.insert(colour, seat);
    }

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut board = Board::new(args.dimension);
    let mut unable_to_play: Vec<Colour> = Vec::new();

    while unable_to_play.len() < TURN_ORDER.len() {
        for colour in TURN_ORDER {
            if unable_to_play.contains(&colour) {
                continue;
            }
            let mut moves: Vec<Move> = board.legal_moves(colour).iter().cloned().collect();
            moves.sort();
            if moves.is_empty() {
                info!(%colour, "no legal moves left");
                println!("{colour} is unable to play.");
                unable_to_play.push(colour);
                continue;
            }
            let chosen = match seats.get_mut(&colour).unwrap() {
                Seat::Bot(policy) => policy.choose(&board, &moves),
                Seat::Human => human_turn(&mut input, &board, colour, &moves)?,
            };
            let Some(mv) = chosen else {
                println!("{colour} passes and is out for the rest of the game.");
                unable_to_play.push(colour);
                continue;
            };
            if let Err(err) = board.play_move(mv) {
                // Policies draw from the legal list, so this is a policy bug;
                // the colour simply loses the turn.
                println!("rejected: {err}");
            }
        }
        if !args.quiet {
            show_board(&board);
            println!("{}", score_line(&board));
            println!();
        }
    }

    println!("FINAL SCORE: {}", score_line(&board));
    let mut standings: Vec<(Colour, usize)> =
        TURN_ORDER.iter().map(|&c| (c, board.score(c))).collect();
    standings.sort_by(|a, b| b.1.cmp(&a.1));
    for (place, (colour, score)) in standings.iter().enumerate() {
        println!("{}. {colour} with {score} cells", place + 1);
    }
    Ok(())
}

/// Ask the human seat for a move. Returns `None` if the player passes.
fn human_turn(
    input: &mut InputReader<impl BufRead>,
    board: &Board,
    colour: Colour,
    moves: &[Move],
) -> io::Result<Option<Move>> {
    enum Command {
        Place(PieceType, Cell, usize),
        Show(PieceType),
        Moves,
        Pieces,
        Board,
        Pass,
        Help,
    }

    /// Matcher for the placement command.
    static PLACE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:place|put)\s+
            (?P<piece>\w+)\s+
            (?:(?:at|on)\s+)?
            (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)
            (?:\s+(?P<var>[0-9]+))?$",
        )
        .unwrap()
    });
    static SHOW: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?:show|variants)\s+(?P<piece>\w+)$").unwrap());

    println!();
    println!(
        "{colour} to play: {} legal moves. Type help or ? for commands.",
        moves.len()
    );
    loop {
        let cmd = input.read_input_lower("> ", |line| match line {
            "?" | "help" | "h" => Some(Command::Help),
            "moves" => Some(Command::Moves),
            "pieces" => Some(Command::Pieces),
            "board" => Some(Command::Board),
            "pass" | "forfeit" => Some(Command::Pass),
            other => {
                if let Some(captures) = PLACE.captures(other) {
                    let piece = match captures.name("piece").unwrap().as_str().parse() {
                        Ok(piece) => piece,
                        Err(_) => {
                            println!(
                                "invalid piece: {}, use names like i5, l4, t5, x",
                                captures.name("piece").unwrap().as_str()
                            );
                            return None;
                        }
                    };
                    let row = match captures.name("row").unwrap().as_str().parse() {
                        Ok(row) => row,
                        Err(_) => {
                            println!("invalid row");
                            return None;
                        }
                    };
                    let col = match captures.name("col").unwrap().as_str().parse() {
                        Ok(col) => col,
                        Err(_) => {
                            println!("invalid column");
                            return None;
                        }
                    };
                    let variant = match captures.name("var") {
                        None => 0,
                        Some(var) => match var.as_str().parse() {
                            Ok(var) => var,
                            Err(_) => {
                                println!("invalid variant index");
                                return None;
                            }
                        },
                    };
                    Some(Command::Place(piece, Cell::new(row, col), variant))
                } else if let Some(captures) = SHOW.captures(other) {
                    match captures.name("piece").unwrap().as_str().parse() {
                        Ok(piece) => Some(Command::Show(piece)),
                        Err(_) => {
                            println!("unknown piece");
                            None
                        }
                    }
                } else {
                    println!("Unrecognised command \"{other}\". Use '?' for help.");
                    None
                }
            }
        })?;

        match cmd {
            Command::Place(piece, anchor, variant) => {
                let shape = piece.shape();
                if variant >= shape.orientations().len() {
                    println!(
                        "{piece} has {} variants; use \"show {piece}\" to list them",
                        shape.orientations().len()
                    );
                    continue;
                }
                let mv =
                    Move::from_orientation(colour, piece, &shape.orientations()[variant], anchor);
                let violations = board.check_move(&mv);
                if violations.is_empty() {
                    return Ok(Some(mv));
                }
                for violation in violations {
                    println!("illegal: {violation}");
                }
            }
            Command::Show(piece) => show_orientations(piece),
            Command::Moves => {
                for mv in moves.iter().take(12) {
                    println!("  {mv}");
                }
                if moves.len() > 12 {
                    println!("  ... and {} more", moves.len() - 12);
                }
            }
            Command::Pieces => {
                let mut remaining: Vec<PieceType> = board.inventory(colour).iter().collect();
                remaining.sort();
                let names: Vec<String> = remaining.iter().map(ToString::to_string).collect();
                println!("remaining: {}", names.join(", "));
            }
            Command::Board => show_board(board),
            Command::Pass => return Ok(None),
            Command::Help => {
                println!(
                    "Available Commands:
    place <piece> <row>,<col> [variant]  play the piece with its anchor on the
        given cell, using the numbered variant (default 0).
    show <piece>                         list the piece's variants; O marks the
        anchor cell.
    moves                                list a few of your legal moves.
    pieces                               list your remaining pieces.
    board                                print the board.
    pass                                 forfeit the rest of the game."
                );
            }
        }
    }
}

/// Print each orientation of the piece as a small grid, marking the anchor.
fn show_orientations(piece: PieceType) {
    for (index, orientation) in piece.shape().orientations().iter().enumerate() {
        println!("variant {index}:");
        let offsets = orientation.offsets();
        let min_row = offsets.iter().map(|o| o.0).min().unwrap();
        let max_row = offsets.iter().map(|o| o.0).max().unwrap();
        let min_col = offsets.iter().map(|o| o.1).min().unwrap();
        let max_col = offsets.iter().map(|o| o.1).max().unwrap();
        for row in min_row..=max_row {
            let mut line = String::new();
            for col in min_col..=max_col {
                line.push(if (row, col) == (0, 0) {
                    'O'
                } else if offsets.contains(&(row, col)) {
                    'X'
                } else {
                    '.'
                });
            }
            println!("  {line}");
        }
    }
}

/// Print the board as a letter grid.
fn show_board(board: &Board) {
    let dim = board.dimension();
    let snapshot = board.grid_snapshot();
    print!("   ");
    for col in 0..dim {
        print!("{:^3}", col);
    }
    println!();
    for row in 0..dim {
        print!("{:>2} ", row);
        for col in 0..dim {
            let glyph = match snapshot[row * dim + col] {
                Some(colour) => colour_letter(colour),
                None => '.',
            };
            print!("{:^3}", glyph);
        }
        println!();
    }
}

fn colour_letter(colour: Colour) -> char {
    match colour {
        Colour::Red => 'R',
        Colour::Green => 'G',
        Colour::Yellow => 'Y',
        Colour::Blue => 'B',
    }
}

fn score_line(board: &Board) -> String {
    TURN_ORDER
        .iter()
        .map(|&colour| format!("{colour}: {}", board.score(colour)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns
    /// `Some`. Converts to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
