use crate::{CuttingDie, DieKind, GridParseError, MAX_SIZE};

/// First wire id handed out to general (user-supplied) dies.
pub const FIRST_GENERAL_ID: u32 = 26;

/// The dies available to a solving session: the 25 standard dies followed by
/// any general dies, in wire-id order.
///
/// Standard ids are 1-based: the unit die is 1, then each doubling size
/// contributes its `Full`, `EvenRow` and `EvenColumn` dies in that order up to
/// id 25. General dies are numbered from [`FIRST_GENERAL_ID`] in input order.
#[derive(Debug, Clone)]
pub struct DieSet {
    dies: Vec<CuttingDie>,
}

impl DieSet {
    /// Builds the standard catalog.
    pub fn standard() -> DieSet {
        let mut dies = Vec::with_capacity(25);
        let mut id = 1;
        for exponent in 0..9 {
            let size = 1 << exponent;
            for kind in DieKind::iter() {
                dies.push(CuttingDie::standard(id, size, kind));
                id += 1;
                // Every stencil layout degenerates to the same 1×1 die.
                if size == 1 {
                    break;
                }
            }
        }

        debug_assert_eq!(dies.len(), 25);
        DieSet { dies }
    }

    /// Parses and appends a general die, assigning it the next wire id.
    pub fn add_general(&mut self, rows: &[String]) -> Result<&CuttingDie, GridParseError> {
        let id = FIRST_GENERAL_ID + self.general().count() as u32;
        let die = CuttingDie::general(id, rows)?;
        self.dies.push(die);
        Ok(self.dies.last().unwrap())
    }

    /// The unique standard die of the given size and kind.
    pub fn get(&self, size: i32, kind: DieKind) -> Option<&CuttingDie> {
        self.dies
            .iter()
            .find(|die| die.width() == size && die.height() == size && die.kind() == Some(kind))
    }

    /// The largest `Full` die, which blankets any board.
    pub fn full_max(&self) -> &CuttingDie {
        self.get(MAX_SIZE, DieKind::Full)
            .expect("the standard catalog always contains the full 256 die")
    }

    /// Looks a die up by its wire id (the `p` field of an operation).
    pub fn by_id(&self, id: u32) -> Option<&CuttingDie> {
        self.dies.iter().find(|die| die.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CuttingDie> {
        self.dies.iter()
    }

    /// The general dies, in wire-id order.
    pub fn general(&self) -> impl Iterator<Item = &CuttingDie> {
        self.dies.iter().filter(|die| die.kind().is_none())
    }

    pub fn len(&self) -> usize {
        self.dies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dies.is_empty()
    }
}
