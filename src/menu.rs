use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info};

use crate::{error::QueueError, factory::PieceSource, queue::PieceQueue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Take the piece at the front of the queue.
    Play,
    /// Generate a new piece at the back of the queue.
    Insert,
    Exit,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("no option was entered")]
    EmptyInput,

    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("{0} is not one of the listed options")]
    UnknownOption(i64),
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommandError::EmptyInput);
        }

        let code: i64 = input
            .parse()
            .map_err(|_| CommandError::NotANumber(input.to_owned()))?;

        match code {
            1 => Ok(Command::Play),
            2 => Ok(Command::Insert),
            0 => Ok(Command::Exit),
            other => Err(CommandError::UnknownOption(other)),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Turn-based loop around one queue: show the queue, read an option, apply it.
///
/// Full and empty queues are reported to the player and the loop carries on;
/// only I/O failures end the session early.
#[derive(Debug)]
pub struct Session<R, W, S, const CAPACITY: usize> {
    queue: PieceQueue<CAPACITY>,
    source: S,
    input: R,
    output: W,
    pause: bool,
}

impl<R, W, S, const CAPACITY: usize> Session<R, W, S, CAPACITY>
where
    R: BufRead,
    W: Write,
    S: PieceSource,
{
    pub fn new(queue: PieceQueue<CAPACITY>, source: S, input: R, output: W) -> Self {
        Self {
            queue,
            source,
            input,
            output,
            pause: true,
        }
    }

    /// Whether to wait for ENTER after each action.
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn queue(&self) -> &PieceQueue<CAPACITY> {
        &self.queue
    }

    pub fn into_parts(self) -> (PieceQueue<CAPACITY>, S, W) {
        (self.queue, self.source, self.output)
    }

    pub fn run(&mut self) -> Result<()> {
        info!(capacity = CAPACITY, "session started");

        while self.turn()? == Flow::Continue {}

        info!(remaining = self.queue.len(), "session finished");
        Ok(())
    }

    fn turn(&mut self) -> Result<Flow> {
        self.show_menu()?;

        let line = match self.read_line()? {
            Some(line) => line,
            None => {
                debug!("input closed, leaving");
                self.farewell()?;
                return Ok(Flow::Stop);
            }
        };

        let mut pause = self.pause;

        match Command::parse(&line) {
            Ok(Command::Exit) => {
                self.farewell()?;
                return Ok(Flow::Stop);
            }
            Ok(Command::Play) => self.play()?,
            Ok(Command::Insert) => self.insert()?,
            Err(err) => {
                debug!(%err, "rejected menu input");
                writeln!(self.output, "\nInvalid option: {}. Please try again.", err)?;

                // anything that is not a number goes straight back to the menu
                if matches!(err, CommandError::EmptyInput | CommandError::NotANumber(_)) {
                    pause = false;
                }
            }
        }

        if pause {
            write!(self.output, "\nPress ENTER to continue...")?;
            self.output.flush()?;
            if self.read_line()?.is_none() {
                debug!("input closed while paused, leaving");
                self.farewell()?;
                return Ok(Flow::Stop);
            }
        }

        Ok(Flow::Continue)
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", self.queue)?;
        writeln!(self.output, "Actions:")?;
        writeln!(self.output, "1. Play piece (dequeue)")?;
        writeln!(self.output, "2. Insert new piece (enqueue)")?;
        writeln!(self.output, "0. Exit")?;
        write!(self.output, "Enter an action code: ")?;
        self.output.flush().context("could not flush menu output")
    }

    fn play(&mut self) -> Result<()> {
        match self.queue.dequeue() {
            Ok(piece) => writeln!(
                self.output,
                "\nPIECE PLAYED: {} removed from the front of the queue.",
                piece
            )?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    fn insert(&mut self) -> Result<()> {
        match self.queue.enqueue(&mut self.source) {
            Ok(piece) => writeln!(
                self.output,
                "\nPIECE INSERTED: {} added to the back of the queue.",
                piece
            )?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    fn report(&mut self, err: QueueError) -> Result<()> {
        match err {
            QueueError::QueueFullError(capacity) => writeln!(
                self.output,
                "\nQueue is full! Cannot insert more pieces. Maximum: {}.",
                capacity
            )?,
            QueueError::QueueEmptyError => {
                writeln!(self.output, "\nQueue is empty! There are no pieces to play.")?
            }
        }
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.output, "\nLeaving the piece queue simulator. Goodbye!")?;
        self.output.flush().context("could not flush menu output")
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("could not read menu input")?;

        Ok((read > 0).then_some(line))
    }
}
