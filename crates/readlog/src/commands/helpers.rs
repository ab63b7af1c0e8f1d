use crate::error::{ReadlogError, Result};
use crate::model::BookId;
use crate::store::DataStore;
use uuid::Uuid;

/// Resolves a full uuid or a unique prefix of one (hyphens optional).
pub fn resolve_id<S: DataStore>(store: &S, input: &str) -> Result<BookId> {
    let input = input.trim();
    if let Ok(id) = Uuid::parse_str(input) {
        return Ok(id);
    }

    let prefix: String = input
        .chars()
        .filter(|c| *c != '-')
        .flat_map(char::to_lowercase)
        .collect();
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ReadlogError::Api(format!("Invalid book id: {}", input)));
    }

    let matches: Vec<BookId> = store
        .list_books()?
        .into_iter()
        .map(|b| b.id)
        .filter(|id| id.simple().to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(ReadlogError::Api(format!("No book found with id {}", input))),
        _ => Err(ReadlogError::Api(format!(
            "Id {} is ambiguous ({} books match)",
            input,
            matches.len()
        ))),
    }
}
