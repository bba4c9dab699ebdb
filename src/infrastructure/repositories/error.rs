use crate::domain::errors::DomainError;
use sqlx::error::{DatabaseError, ErrorKind};

const COL_CATEGORY_NAME: &str = "categories.name";
const COL_CATEGORY_SLUG: &str = "categories.slug";
const COL_POST_SLUG: &str = "posts.slug";

// SQLITE_CONSTRAINT_FOREIGNKEY and SQLITE_CONSTRAINT_TRIGGER (RESTRICT actions).
const SQLITE_FOREIGN_KEY_CODES: [&str; 2] = ["787", "1811"];
const SQLITE_FOREIGN_KEY_MESSAGE: &str = "FOREIGN KEY constraint failed";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            if is_foreign_key(&**db_err) {
                return DomainError::not_found("referenced record not found");
            }
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    if message.contains(COL_CATEGORY_NAME) {
                        DomainError::conflict("category name already exists")
                    } else if message.contains(COL_CATEGORY_SLUG) || message.contains(COL_POST_SLUG)
                    {
                        DomainError::conflict("slug already exists")
                    } else {
                        DomainError::conflict("unique constraint violated")
                    }
                }
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    DomainError::validation(message.to_string())
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if is_foreign_key(&**db_err))
}

fn is_foreign_key(db_err: &dyn DatabaseError) -> bool {
    matches!(db_err.kind(), ErrorKind::ForeignKeyViolation)
        || db_err
            .code()
            .is_some_and(|code| SQLITE_FOREIGN_KEY_CODES.contains(&code.as_ref()))
        || db_err.message().contains(SQLITE_FOREIGN_KEY_MESSAGE)
}
