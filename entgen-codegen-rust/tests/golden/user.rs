// Code generated by entgen, DO NOT EDIT.

/// User is the model entity for the User schema.
#[derive(Debug, Clone)]
pub struct User {
    /// ID of the entity.
    pub id: String,
    pub age: i32,
    pub name: String,
    /// Nickname shown instead of the name.
    pub nickname: Option<String>,
    pub tags: Vec<String>,
    pub status: UserStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub last_seen: Option<chrono::DateTime<chrono::Utc>>,
    pub score: f64,
    /// Relations loaded together with the entity.
    pub edges: UserEdges,
}

/// UserStatus is the type of the "status" enum field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserStatus {
    Active,
    InReview,
}

impl UserStatus {
    /// Value of the variant as stored in the column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::InReview => "in_review",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserStatus {
    type Err = entgen_runtime::InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "in_review" => Ok(Self::InReview),
            other => Err(entgen_runtime::InvalidEnumValue {
                enum_name: "UserStatus",
                value: other.to_string(),
            }),
        }
    }
}

/// Users is a list of User records.
pub type Users = Vec<User>;

/// Storage values of one User row.
#[derive(Default)]
struct UserScan {
    id: i64,
    age: i32,
    name: String,
    nickname: entgen_runtime::Nullable<String>,
    tags: Vec<u8>,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
    last_seen: Option<chrono::DateTime<chrono::Utc>>,
    score: entgen_runtime::Nullable<f64>,
}

impl User {
    /// Columns of the users table, in scan order.
    pub const COLUMNS: &'static [&'static str] = &["id", "age", "name", "nickname", "tags", "status", "created_at", "last_seen", "score"];

    /// Decode the current row of `rows` into a User.
    ///
    /// Values are scanned in [`COLUMNS`](Self::COLUMNS) order.
    pub fn from_row<R: entgen_runtime::Rows + ?Sized>(rows: &mut R) -> Result<Self, entgen_runtime::DecodeError> {
        let mut scan = UserScan::default();
        rows.scan(&mut [
            &mut scan.id,
            &mut scan.age,
            &mut scan.name,
            &mut scan.nickname,
            &mut scan.tags,
            &mut scan.status,
            &mut scan.created_at,
            &mut scan.last_seen,
            &mut scan.score,
        ])?;
        Ok(Self {
            id: scan.id.to_string(),
            age: scan.age,
            name: scan.name,
            nickname: scan.nickname.into_option(),
            tags: entgen_runtime::decode_json("tags", &scan.tags)?,
            status: entgen_runtime::decode_enum("status", &scan.status)?,
            created_at: scan.created_at,
            last_seen: scan.last_seen,
            score: scan.score.value,
            edges: UserEdges::default(),
        })
    }

    /// Decode every remaining row of `rows` into Users.
    pub fn from_rows<R: entgen_runtime::Rows + ?Sized>(rows: &mut R) -> Result<Users, entgen_runtime::DecodeError> {
        let mut users = Users::new();
        while rows.next_row()? {
            users.push(Self::from_row(rows)?);
        }
        Ok(users)
    }
}

/// Neighbours of a User loaded by a query.
#[derive(Debug, Clone, Default)]
pub struct UserEdges {
    pub pets: entgen_runtime::Edge<Vec<super::Pet>>,
}

impl UserEdges {
    /// The "pets" edge, or an error if it was not loaded.
    pub fn pets_or_err(&self) -> Result<&[super::Pet], entgen_runtime::EdgeError> {
        self.pets.get("pets").map(Vec::as_slice)
    }
}
