// Code generated by entgen, DO NOT EDIT.

/// Group is the model entity for the Group schema.
#[derive(Debug, Clone)]
pub struct Group {
    /// ID of the entity.
    pub id: i64,
    pub name: String,
}

/// Groups is a list of Group records.
pub type Groups = Vec<Group>;

/// Storage values of one Group row.
#[derive(Default)]
struct GroupScan {
    id: i64,
    name: String,
}

impl Group {
    /// Columns of the groups table, in scan order.
    pub const COLUMNS: &'static [&'static str] = &["id", "name"];

    /// Decode the current row of `rows` into a Group.
    ///
    /// Values are scanned in [`COLUMNS`](Self::COLUMNS) order.
    pub fn from_row<R: entgen_runtime::Rows + ?Sized>(rows: &mut R) -> Result<Self, entgen_runtime::DecodeError> {
        let mut scan = GroupScan::default();
        rows.scan(&mut [
            &mut scan.id,
            &mut scan.name,
        ])?;
        Ok(Self {
            id: scan.id,
            name: scan.name,
        })
    }

    /// Decode every remaining row of `rows` into Groups.
    pub fn from_rows<R: entgen_runtime::Rows + ?Sized>(rows: &mut R) -> Result<Groups, entgen_runtime::DecodeError> {
        let mut groups = Groups::new();
        while rows.next_row()? {
            groups.push(Self::from_row(rows)?);
        }
        Ok(groups)
    }
}
