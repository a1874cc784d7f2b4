//! Identifier allocation shared by the store backends.

use certledger_core::{IdGenerator, RecordId};

use crate::error::{Result, StoreError};
use crate::traits::InsertResult;

/// Draw ids until `try_insert` places one, up to `max_attempts` draws.
///
/// `try_insert` must be an atomic insert-if-absent: it either writes the
/// record under the given id or reports a collision and writes nothing.
pub(crate) fn allocate<F>(
    ids: &dyn IdGenerator,
    max_attempts: u32,
    mut try_insert: F,
) -> Result<RecordId>
where
    F: FnMut(&RecordId) -> Result<InsertResult>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        let id = ids.generate();
        match try_insert(&id)? {
            InsertResult::Inserted => return Ok(id),
            InsertResult::Collision => {
                tracing::warn!(id = %id, attempt, "record identifier collision");
                if attempt >= max_attempts {
                    return Err(StoreError::IdentifierCollision {
                        id,
                        attempts: attempt,
                    });
                }
            }
        }
    }
}
