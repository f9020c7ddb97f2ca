// Code generated by entgen, DO NOT EDIT.

/// Pet is the model entity for the Pet schema.
#[derive(Debug, Clone)]
pub struct Pet {
    /// ID of the entity.
    pub id: String,
    pub name: String,
    /// Relations loaded together with the entity.
    pub edges: PetEdges,
}

/// Pets is a list of Pet records.
pub type Pets = Vec<Pet>;

/// Storage values of one Pet row.
#[derive(Default)]
struct PetScan {
    id: i64,
    name: String,
}

impl Pet {
    /// Columns of the pets table, in scan order.
    pub const COLUMNS: &'static [&'static str] = &["id", "name"];

    /// Decode the current row of `rows` into a Pet.
    ///
    /// Values are scanned in [`COLUMNS`](Self::COLUMNS) order.
    pub fn from_row<R: entgen_runtime::Rows + ?Sized>(rows: &mut R) -> Result<Self, entgen_runtime::DecodeError> {
        let mut scan = PetScan::default();
        rows.scan(&mut [
            &mut scan.id,
            &mut scan.name,
        ])?;
        Ok(Self {
            id: scan.id.to_string(),
            name: scan.name,
            edges: PetEdges::default(),
        })
    }

    /// Decode every remaining row of `rows` into Pets.
    pub fn from_rows<R: entgen_runtime::Rows + ?Sized>(rows: &mut R) -> Result<Pets, entgen_runtime::DecodeError> {
        let mut pets = Pets::new();
        while rows.next_row()? {
            pets.push(Self::from_row(rows)?);
        }
        Ok(pets)
    }
}

/// Neighbours of a Pet loaded by a query.
#[derive(Debug, Clone, Default)]
pub struct PetEdges {
    pub owner: entgen_runtime::Edge<Option<Box<super::User>>>,
}

impl PetEdges {
    /// The "owner" edge, or an error if it was not loaded or no User was found.
    pub fn owner_or_err(&self) -> Result<&super::User, entgen_runtime::EdgeError> {
        self.owner
            .get("owner")?
            .as_deref()
            .ok_or(entgen_runtime::EdgeError::NotFound { edge: "owner" })
    }
}
