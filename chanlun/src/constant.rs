use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FractalType {
    Top,
    Bottom,
    None,
}

impl FractalType {
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::None => Self::None,
        }
    }

    pub fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// The seed direction implied by which global extreme occurs earlier:
    /// an earlier high means the series starts by falling away from a top.
    pub fn from_earlier_extreme_is_high(is_high: bool) -> Self {
        if is_high { Self::Down } else { Self::Up }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Daily,
    Minute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Min5,
    Min15,
    Min30,
    Min60,
}

impl Frequency {
    pub fn minutes(self) -> u32 {
        match self {
            Self::Min5 => 5,
            Self::Min15 => 15,
            Self::Min30 => 30,
            Self::Min60 => 60,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustMode {
    #[default]
    None,
    Forward,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Mootdx,
    Baostock,
}

pub struct Const;

impl Const {
    /// Window radius used by F1 and the minimum index gap used by F4.
    pub const FRACTAL_WINDOW: usize = 4;
    pub const PROXIMITY_GAP: usize = 4;
}
