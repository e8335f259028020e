use core::ops::Deref;

const LINES: usize = 8;
const WIDTH: usize = 15;

/// A full screen of text: a fixed number of fixed-width lines.
///
/// The shape is checked when the block is built, so every block fills the screen the same
/// way and the renderer never has to look at which state it is drawing.
#[derive(Debug, PartialEq, Eq)]
pub struct DisplayBlock {
    lines: [&'static str; LINES],
}

impl DisplayBlock {
    pub const LINES: usize = LINES;
    pub const WIDTH: usize = WIDTH;

    pub const STOP: Self = Self::new([
        "               ",
        "               ",
        " SINAL FECHADO ",
        "               ",
        "    AGUARDE    ",
        "               ",
        "               ",
        "               ",
    ]);

    pub const CAUTION: Self = Self::new([
        "               ",
        "               ",
        "   SINAL DE    ",
        "    ATENCAO    ",
        "               ",
        "  PREPARE SE   ",
        "               ",
        "               ",
    ]);

    pub const GO: Self = Self::new([
        "               ",
        "               ",
        " SINAL ABERTO  ",
        "               ",
        " ATRAVESSE COM ",
        "    CUIDADO    ",
        "               ",
        "               ",
    ]);

    pub const INTRODUCTION: Self = Self::new([
        "               ",
        "   Me chamo    ",
        "  Hagliberto,  ",
        "   aluno do    ",
        "  Embarcatech  ",
        "               ",
        " Irei mostrar  ",
        "   o projeto   ",
    ]);

    /// Panics (at compile time, for the constants above) if a line isn't exactly `WIDTH`
    /// bytes long.
    pub const fn new(lines: [&'static str; LINES]) -> Self {
        let mut i = 0;
        while i < LINES {
            assert!(
                lines[i].len() == WIDTH,
                "display lines must be blank-padded to the screen width"
            );
            i += 1;
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[&'static str; LINES] {
        &self.lines
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl Deref for DisplayBlock {
    type Target = [&'static str];

    fn deref(&self) -> &Self::Target {
        &self.lines
    }
}
