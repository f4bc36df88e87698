use nukigata_core::Direction;
use serde::{Deserialize, Serialize};

/// One applied die operation, with the answer-format field names: die id `p`,
/// anchor `(x, y)`, direction code `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuttingInfo {
    pub p: u32,
    pub x: i32,
    pub y: i32,
    #[serde(with = "direction_code")]
    pub s: Direction,
}

/// The wire encoding of [`Direction`]: `0=Up, 1=Down, 2=Left, 3=Right`.
mod direction_code {
    use nukigata_core::Direction;
    use serde::{Deserialize as _, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(dir: &Direction, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(dir.u8())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Direction, D::Error> {
        let code = u8::deserialize(deserializer)?;
        if code < 4 {
            Ok(Direction::from_u8(code))
        } else {
            Err(de::Error::custom(format!("invalid direction code {code}")))
        }
    }
}

/// Append-only record of every operation applied to the work board. Replaying
/// it from the start board reproduces the final board exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpLog {
    ops: Vec<CuttingInfo>,
}

impl OpLog {
    pub fn new() -> OpLog {
        OpLog::default()
    }

    pub fn push(&mut self, info: CuttingInfo) {
        self.ops.push(info);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[CuttingInfo] {
        &self.ops
    }

    /// The answer wire value, `{"n": len, "ops": [...]}`.
    pub fn to_answer(&self) -> Answer {
        Answer {
            n: self.ops.len(),
            ops: self.ops.clone(),
        }
    }
}

impl FromIterator<CuttingInfo> for OpLog {
    fn from_iter<T: IntoIterator<Item = CuttingInfo>>(iter: T) -> OpLog {
        OpLog {
            ops: iter.into_iter().collect(),
        }
    }
}

/// The answer format posted back to the contest server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub n: usize,
    pub ops: Vec<CuttingInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_serializes_to_the_wire_contract() {
        let mut log = OpLog::new();
        log.push(CuttingInfo {
            p: 1,
            x: 0,
            y: 0,
            s: Direction::Right,
        });
        log.push(CuttingInfo {
            p: 23,
            x: -4,
            y: 2,
            s: Direction::Up,
        });

        let json = serde_json::to_string(&log.to_answer()).unwrap();
        assert_eq!(
            json,
            r#"{"n":2,"ops":[{"p":1,"x":0,"y":0,"s":3},{"p":23,"x":-4,"y":2,"s":0}]}"#
        );
    }

    #[test]
    fn answer_round_trips() {
        let answer = Answer {
            n: 1,
            ops: vec![CuttingInfo {
                p: 5,
                x: -1,
                y: 3,
                s: Direction::Left,
            }],
        };
        let json = serde_json::to_string(&answer).unwrap();
        assert_eq!(serde_json::from_str::<Answer>(&json).unwrap(), answer);
    }

    #[test]
    fn direction_codes_outside_the_wire_range_are_rejected() {
        let err = serde_json::from_str::<CuttingInfo>(r#"{"p":1,"x":0,"y":0,"s":4}"#);
        assert!(err.is_err());
    }
}
