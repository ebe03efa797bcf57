use crate::model::{
    driver::{ConnectionTarget, DatabaseDriver},
    fixture::{Fixture, PasswordCredentials},
};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod seed;

fn test_credentials() -> PasswordCredentials {
    PasswordCredentials {
        salt: "$2b$04$abcdefghijklmnopqrstuv".to_string(),
        hash: "$2b$04$abcdefghijklmnopqrstuvwxyz0123456789ABCDEFGHIJKLM".to_string(),
    }
}

fn file_target(path: &std::path::Path) -> ConnectionTarget {
    ConnectionTarget::parse(format!("file:{}", path.display())).unwrap()
}
