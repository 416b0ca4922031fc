use super::*;
use crate::N_ACTIONS;
use crate::Score;
use crate::Utility;
use byteorder::BE;
use byteorder::ReadBytesExt;
use std::collections::HashMap;
use std::io::Read;

/// Artifact signature followed by the action width.
const HEADER: &[u8; 11] = b"QTABLE\n\xFF\r\n\0";
/// Signals end of rows.
const FOOTER: u16 = 0xFFFF;
/// score, upcard, soft, then one value per action.
const N_FIELDS: u16 = 3 + N_ACTIONS as u16;

/// Action values per state, loaded once and never mutated.
/// Missing states read as the zero vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyTable {
    values: HashMap<StateKey, [Utility; N_ACTIONS]>,
}

impl PolicyTable {
    pub fn get(&self, key: &StateKey) -> [Utility; N_ACTIONS] {
        self.values
            .get(key)
            .copied()
            .unwrap_or([0.0; N_ACTIONS])
    }
    pub fn contains(&self, key: &StateKey) -> bool {
        self.values.contains_key(key)
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(StateKey, [Utility; N_ACTIONS])> for PolicyTable {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (StateKey, [Utility; N_ACTIONS])>,
    {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl PolicyTable {
    /// Decodes the binary artifact. Every structural problem is a
    /// [`StoreError::Deserialize`]; nothing here panics on bad input.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        let mut reader = bytes;
        let ref mut header = [0u8; HEADER.len()];
        reader
            .read_exact(header)
            .map_err(|_| broken("missing header"))?;
        if header != HEADER {
            return Err(broken("bad header"));
        }
        let width = reader.read_u16::<BE>().map_err(|_| broken("missing width"))?;
        if width as usize != N_ACTIONS {
            return Err(broken(format!(
                "action width {} does not match {}",
                width, N_ACTIONS
            )));
        }
        let mut values = HashMap::new();
        loop {
            match reader.read_u16::<BE>().map_err(|_| broken("missing footer"))? {
                N_FIELDS => {
                    let (key, row) = Self::row(&mut reader)?;
                    if values.insert(key, row).is_some() {
                        return Err(broken(format!("duplicate state {}", key)));
                    }
                }
                FOOTER => break,
                n => return Err(broken(format!("unexpected number of fields: {}", n))),
            }
        }
        match reader.len() {
            0 => Ok(Self { values }),
            n => Err(broken(format!("{} trailing bytes after footer", n))),
        }
    }

    /// Encodes rows sorted by key so equal tables produce equal bytes.
    /// Scores and upcards must fit the artifact's 16-bit fields.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        let mut keys = self.values.keys().copied().collect::<Vec<_>>();
        keys.sort();
        let mut bytes = Vec::with_capacity(HEADER.len() + 4 + keys.len() * 40);
        bytes.extend_from_slice(HEADER);
        bytes.extend_from_slice(&(N_ACTIONS as u16).to_be_bytes());
        for key in keys.iter() {
            bytes.extend_from_slice(&N_FIELDS.to_be_bytes());
            bytes.extend_from_slice(&2u32.to_be_bytes());
            bytes.extend_from_slice(&Self::narrow(key, key.score)?.to_be_bytes());
            bytes.extend_from_slice(&2u32.to_be_bytes());
            bytes.extend_from_slice(&Self::narrow(key, key.upcard)?.to_be_bytes());
            bytes.extend_from_slice(&1u32.to_be_bytes());
            bytes.push(key.soft as u8);
            for value in self.get(key) {
                bytes.extend_from_slice(&4u32.to_be_bytes());
                bytes.extend_from_slice(&value.to_be_bytes());
            }
        }
        bytes.extend_from_slice(&FOOTER.to_be_bytes());
        Ok(bytes)
    }

    fn narrow(key: &StateKey, value: Score) -> Result<i16, StoreError> {
        i16::try_from(value).map_err(|_| StoreError::Encode(format!("state {} out of range", key)))
    }

    fn row(reader: &mut &[u8]) -> Result<(StateKey, [Utility; N_ACTIONS]), StoreError> {
        Self::length(reader, 2)?;
        let score = reader.read_i16::<BE>().map_err(|_| broken("truncated score"))?;
        Self::length(reader, 2)?;
        let upcard = reader.read_i16::<BE>().map_err(|_| broken("truncated upcard"))?;
        Self::length(reader, 1)?;
        let soft = match reader.read_u8().map_err(|_| broken("truncated soft flag"))? {
            0 => false,
            1 => true,
            n => return Err(broken(format!("soft flag {} is not boolean", n))),
        };
        let mut row = [0.0; N_ACTIONS];
        for value in row.iter_mut() {
            Self::length(reader, 4)?;
            *value = reader.read_f32::<BE>().map_err(|_| broken("truncated value"))?;
        }
        Ok((StateKey::from((score as i32, upcard as i32, soft)), row))
    }

    fn length(reader: &mut &[u8], expected: u32) -> Result<(), StoreError> {
        match reader.read_u32::<BE>() {
            Ok(n) if n == expected => Ok(()),
            Ok(n) => Err(broken(format!("field length {} (expected {})", n, expected))),
            Err(_) => Err(broken("truncated field length")),
        }
    }
}

fn broken(reason: impl std::fmt::Display) -> StoreError {
    StoreError::Deserialize(reason.to_string())
}
