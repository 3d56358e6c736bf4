use crate::error::CatFormError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `cats` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct CatRecord {
    pub name: String,
    pub coat: String,
    pub donut: String,
}

/// Form body as posted to `/write-db`, before presence checks.
#[derive(Debug, Default, Deserialize)]
pub struct RawCatForm {
    pub name: Option<String>,
    pub coat: Option<String>,
    pub donut: Option<String>,
}

impl TryFrom<RawCatForm> for CatRecord {
    type Error = CatFormError;

    /// Values are taken verbatim; empty strings count as present.
    fn try_from(form: RawCatForm) -> Result<Self, Self::Error> {
        Ok(CatRecord {
            name: form.name.ok_or(CatFormError::MissingField("name"))?,
            coat: form.coat.ok_or(CatFormError::MissingField("coat"))?,
            donut: form.donut.ok_or(CatFormError::MissingField("donut"))?,
        })
    }
}
