//! Line-oriented interactive shell.
//!
//! The shell starts in [`Mode::Begin`], waiting for a FEN or `$reset`.
//! In [`Mode::Running`] the user plays moves by square index: first the
//! origin, then one of the printed destinations. [`Mode::TestMoveGen`]
//! lists the generated moves of any square given in algebraic form.
//!
//! ```text
//! $Enter a move or command
//! > 12
//! 20 28
//! Enter a target square
//! 28
//! ```

pub mod command;

use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::board::{notation, MoveList, Position, Side, Square};
use crate::engine::Engine;
use crate::timer::Timer;

use command::{parse_algebraic_square, parse_command, parse_square_index, Command};

pub use command::ShellError;

/// Which kind of input the shell is waiting for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// No board yet: a FEN or `$reset`
    Begin,
    /// Playing moves on the current board
    Running,
    /// Listing generated moves square by square
    TestMoveGen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    engine: Engine,
    mode: Mode,
    /// Moves generated per origin square since the last move was played.
    generated: HashMap<Square, MoveList>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Shell::with_engine(Engine::default(), input, output)
    }

    pub fn with_engine(engine: Engine, input: R, output: W) -> Self {
        Shell {
            input,
            output,
            engine,
            mode: Mode::Begin,
            generated: HashMap::new(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Run until `$quit` or end of input.
    ///
    /// Bad input is logged as a warning and the session goes on; only I/O
    /// failures end it early.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let flow = match self.step() {
                Ok(flow) => flow,
                Err(e) if e.is_recoverable() => {
                    log::warn!("{e}");
                    Flow::Continue
                }
                Err(e) => return Err(e),
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn step(&mut self) -> Result<Flow, ShellError> {
        match self.mode {
            Mode::Begin => self.begin(),
            Mode::Running => self.running(),
            Mode::TestMoveGen => self.test_move_gen(),
        }
    }

    fn prompt(&mut self, text: &str) -> Result<(), ShellError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next input line without its terminator, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn load(&mut self, position: Position) {
        self.engine.set_position(position);
        self.generated.clear();
        self.mode = Mode::Running;
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.generated.clear();
    }

    fn begin(&mut self) -> Result<Flow, ShellError> {
        self.prompt("$Enter a FEN or $reset\n> ")?;
        let Some(line) = self.read_line()? else {
            return Ok(Flow::Quit);
        };

        match parse_command(&line)? {
            Some(Command::Reset) => {
                self.reset();
                self.mode = Mode::Running;
            }
            Some(Command::TestMoveGen) => self.mode = Mode::TestMoveGen,
            Some(Command::Quit) => return Ok(Flow::Quit),
            Some(other) => log::warn!("{other:?} needs a board"),
            None => {
                let position: Position = line.trim().parse()?;
                self.load(position);
            }
        }
        Ok(Flow::Continue)
    }

    fn running(&mut self) -> Result<Flow, ShellError> {
        self.prompt("$Enter a move or command\n> ")?;
        let Some(line) = self.read_line()? else {
            return Ok(Flow::Quit);
        };
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        match parse_command(&line)? {
            Some(Command::Reset) => self.reset(),
            Some(Command::Quit) => return Ok(Flow::Quit),
            Some(Command::TestMoveGen) => self.mode = Mode::TestMoveGen,
            Some(Command::ExitBoard) => self.mode = Mode::Begin,
            Some(Command::GetPosition) => {
                writeln!(self.output, "{}", self.engine.position().position_string())?;
            }
            Some(Command::Search(depth)) => self.search(depth)?,
            Some(Command::Perft(depth)) => self.perft(depth)?,
            Some(Command::Unknown(cmd)) => log::warn!("Unknown command {cmd}"),
            None => return self.user_move(&line),
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self, depth: u32) -> Result<(), ShellError> {
        let timer = Timer::start();
        let played = self.engine.play(depth)?;
        timer.stop();
        match played {
            Some(mv) => {
                self.generated.clear();
                writeln!(self.output, "{mv}")?;
                self.report_checks()?;
            }
            None => log::info!("No legal moves"),
        }
        Ok(())
    }

    fn perft(&mut self, depth: u32) -> Result<(), ShellError> {
        let timer = Timer::start();
        let report = self.engine.count_moves(depth)?;
        timer.stop();
        write!(self.output, "{report}")?;
        Ok(())
    }

    /// An origin square index, then a target square index.
    fn user_move(&mut self, line: &str) -> Result<Flow, ShellError> {
        let origin = parse_square_index(line)?;
        let position = self.engine.position();
        let moves = self
            .generated
            .entry(origin)
            .or_insert_with(|| position.moves_from(origin))
            .clone();

        let destinations: Vec<String> = moves
            .iter()
            .map(|mv| mv.to().index().to_string())
            .collect();
        writeln!(self.output, "{}", destinations.join(" "))?;
        writeln!(self.output, "Enter a target square")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(Flow::Quit);
        };
        let target = parse_square_index(&line)?;

        match moves.iter().copied().find(|mv| mv.to() == target) {
            Some(mv) => {
                self.engine.apply(mv);
                self.generated.clear();
                self.report_checks()?;
            }
            None => log::info!("Invalid move"),
        }
        Ok(Flow::Continue)
    }

    fn report_checks(&mut self) -> Result<(), ShellError> {
        for side in Side::BOTH {
            if self.engine.position().in_check(side) {
                writeln!(self.output, "CHECK {side}")?;
            }
        }
        Ok(())
    }

    fn test_move_gen(&mut self) -> Result<Flow, ShellError> {
        self.prompt("$Enter a square (e.g. e4) or command\n> ")?;
        let Some(line) = self.read_line()? else {
            return Ok(Flow::Quit);
        };
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        match parse_command(&line)? {
            Some(Command::Reset) => self.reset(),
            Some(Command::Quit) => return Ok(Flow::Quit),
            Some(Command::ExitBoard) => self.mode = Mode::Begin,
            Some(other) => log::warn!("{other:?} is not available while testing move generation"),
            None => {
                let square = parse_algebraic_square(&line)?;
                log::debug!("Generating on square {}", square.index());
                let position = self.engine.position();
                let listing: Vec<String> = position
                    .moves_from(square)
                    .iter()
                    .map(|&mv| {
                        format!(
                            "{} {}",
                            mv.to().index(),
                            notation::algebraic(mv, position.squares())
                        )
                    })
                    .collect();
                writeln!(self.output, "{}", listing.join(" "))?;
            }
        }
        Ok(Flow::Continue)
    }
}
