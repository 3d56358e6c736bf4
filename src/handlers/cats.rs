use axum::{Form, extract::State, response::Html};
use tracing::info;

use crate::db::{CatRecord, RawCatForm};
use crate::{CatformError, router::CatformState};

/// GET / -> the submission form. The schema is created before the router serves.
pub async fn index_handler(
    State(state): State<CatformState>,
) -> Result<Html<String>, CatformError> {
    Ok(Html(state.views.index()?))
}

/// POST /write-db -> store one cat and thank the submitter by name.
pub async fn write_db_handler(
    State(state): State<CatformState>,
    Form(form): Form<RawCatForm>,
) -> Result<Html<String>, CatformError> {
    let cat = CatRecord::try_from(form)?;

    state.storage.insert(&cat).await?;
    info!(name = %cat.name, "stored cat submission");

    Ok(Html(state.views.thanks(&cat.name)?))
}
