use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
        }
    }

    /// Single-line form consumed by the order archive function.
    ///
    /// The zip code is repeated and the state is preceded by two spaces. The
    /// archive consumer already stores strings in this shape, so it is kept as is.
    pub fn archive_line(&self) -> String {
        format!(
            "{}, {},  {} - {}, {}",
            self.street, self.city, self.state, self.zip_code, self.zip_code
        )
    }
}
