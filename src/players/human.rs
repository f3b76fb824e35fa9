//! Text-driven human player.

use std::io::Write;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

use log::warn;

use crate::core::{
    parse_move, EngineError, Move, PlayerColor, PlayerError, PlayerKind, Status,
};

use super::seat::Seat;
use super::Player;

/// Shared source of input lines.
///
/// Both colors may be human and read from the same terminal, so the receiver
/// sits behind a mutex.
pub type HumanInput = Arc<Mutex<Receiver<String>>>;

/// Reads moves as text, one line per request.
///
/// Before each request the mirrored position is printed, followed by a
/// prompt naming the expected phase. Lines that do not parse are reported
/// and asked for again. Illegal but well-formed moves go to the referee,
/// which rejects them and asks again.
pub struct HumanPlayer {
    seat: Seat,
    input: HumanInput,
    output: Box<dyn Write + Send>,
}

impl HumanPlayer {
    pub fn new(
        color: PlayerColor,
        radius: u8,
        input: HumanInput,
        output: Box<dyn Write + Send>,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            seat: Seat::new(color, radius)?,
            input,
            output,
        })
    }

    fn read_line(&self) -> Result<String, PlayerError> {
        let color = self.seat.color();
        let input = self
            .input
            .lock()
            .map_err(|_| PlayerError::InputClosed(color))?;
        input.recv().map_err(|_| PlayerError::InputClosed(color))
    }
}

impl Player for HumanPlayer {
    fn color(&self) -> PlayerColor {
        self.seat.color()
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn request(&mut self) -> Result<Move, PlayerError> {
        let color = self.seat.color();
        let phase = self.seat.engine().phase_of(color);
        writeln!(self.output, "{}", self.seat.engine().snapshot())?;

        loop {
            write!(self.output, "{color} {phase}> ")?;
            self.output.flush()?;

            let line = self.read_line()?;
            match parse_move(&line, phase) {
                Ok(mv) => {
                    self.seat.submit(mv.clone());
                    return Ok(mv);
                }
                Err(err) => {
                    warn!("{err}");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn confirm(&mut self, status: Status) -> Result<(), PlayerError> {
        if status == Status::Illegal {
            writeln!(self.output, "illegal move, try again")?;
        }
        self.seat.confirm(status)
    }

    fn update(&mut self, opponent_move: &Move, status: Status) -> Result<(), PlayerError> {
        writeln!(self.output, "{} played {opponent_move}", self.seat.color().opponent())?;
        self.seat.update(opponent_move, status)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::core::Hex;

    fn human(lines: &[&str]) -> HumanPlayer {
        let (tx, rx) = mpsc::channel();
        for line in lines {
            tx.send((*line).to_string()).unwrap();
        }
        drop(tx);
        HumanPlayer::new(
            PlayerColor::Red,
            2,
            Arc::new(Mutex::new(rx)),
            Box::new(std::io::sink()),
        )
        .unwrap()
    }

    #[test]
    fn test_reads_prepare() {
        let mut player = human(&["(0,0)"]);
        assert_eq!(player.request().unwrap(), Move::Prepare(Hex::new(0, 0)));
        player.confirm(Status::Ok).unwrap();
    }

    #[test]
    fn test_reprompts_on_garbage() {
        let mut player = human(&["banana", "(0,", "(0, 2)"]);
        assert_eq!(player.request().unwrap(), Move::Prepare(Hex::new(0, 2)));
    }

    #[test]
    fn test_closed_input() {
        let mut player = human(&["nope"]);
        let err = player.request().unwrap_err();
        assert!(matches!(err, PlayerError::InputClosed(PlayerColor::Red)));
    }

    #[test]
    fn test_surrender_keyword() {
        let mut player = human(&["Surrender"]);
        assert_eq!(player.request().unwrap(), Move::Surrender);
    }
}
