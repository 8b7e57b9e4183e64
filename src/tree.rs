//! Solution trees.
//!
//! A problem's recorded solution is a single forced line, so the tree is a
//! chain: every interior node holds exactly one move (a display coordinate)
//! and the line ends in a terminal outcome. In JSON a terminal is a string
//! (`"win"`) and an interior node is a one-entry object:
//!
//! ```text
//! {"B2": {"C3": {"D4": "win"}}}
//! ```
//!
//! Whose turn it is at a node is not stored; it follows from the problem's
//! next player and the depth.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{MARKER_LOSE, MARKER_WIN};
use crate::coord::{decode_display, positional_to_display};
use crate::error::{Error, Result};

/// How a line ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => MARKER_WIN,
            Outcome::Lose => MARKER_LOSE,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            MARKER_WIN => Some(Outcome::Win),
            MARKER_LOSE => Some(Outcome::Lose),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolutionTree {
    Terminal(Outcome),
    Move {
        coords: String,
        next: Box<SolutionTree>,
    },
}

impl SolutionTree {
    pub fn win() -> Self {
        SolutionTree::Terminal(Outcome::Win)
    }

    /// Build the tree for a chronological sequence of positional move codes.
    ///
    /// Works backwards from the winning terminal, wrapping each earlier move
    /// around the tree built so far.
    pub fn build<M: AsRef<str>>(moves: &[M]) -> Result<Self> {
        if moves.is_empty() {
            return Err(Error::EmptySolution);
        }
        moves.iter().rev().try_fold(SolutionTree::win(), |tree, code| {
            Ok(SolutionTree::Move {
                coords: positional_to_display(code.as_ref())?,
                next: Box::new(tree),
            })
        })
    }

    /// The moves along the line, first to last.
    pub fn main_line(&self) -> Vec<&str> {
        let mut moves = Vec::new();
        let mut node = self;
        while let SolutionTree::Move { coords, next } = node {
            moves.push(coords.as_str());
            node = next;
        }
        moves
    }

    pub fn depth(&self) -> usize {
        self.main_line().len()
    }

    pub fn outcome(&self) -> Outcome {
        let mut node = self;
        loop {
            match node {
                SolutionTree::Terminal(outcome) => return *outcome,
                SolutionTree::Move { next, .. } => node = next,
            }
        }
    }

    /// Check that every move names a point on a `size x size` board.
    pub fn check_fits(&self, size: usize) -> Result<()> {
        for coords in self.main_line() {
            let (row, col) = decode_display(coords)?;
            if row >= size || col >= size {
                return Err(Error::InvalidTree {
                    reason: format!("move {coords} is off a {size}x{size} board"),
                });
            }
        }
        Ok(())
    }
}

impl Serialize for SolutionTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            SolutionTree::Terminal(outcome) => serializer.serialize_str(outcome.as_str()),
            SolutionTree::Move { coords, next } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(coords, next)?;
                map.end()
            }
        }
    }
}

struct TreeVisitor;

impl<'de> Visitor<'de> for TreeVisitor {
    type Value = SolutionTree;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"win\", \"lose\" or an object with exactly one move")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        Outcome::parse(v)
            .map(SolutionTree::Terminal)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let (coords, next): (String, SolutionTree) = map
            .next_entry()?
            .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;
        if map.next_key::<IgnoredAny>()?.is_some() {
            return Err(de::Error::custom(format!(
                "node with move {coords} has more than one continuation"
            )));
        }
        decode_display(&coords).map_err(<A::Error as de::Error>::custom)?;
        Ok(SolutionTree::Move {
            coords,
            next: Box::new(next),
        })
    }
}

impl<'de> Deserialize<'de> for SolutionTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(TreeVisitor)
    }
}
