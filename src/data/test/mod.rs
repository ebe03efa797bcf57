use crate::data::{
    account::AccountRepository, base::BaseRepository, membership::MembershipRepository,
    namespace::NamespaceRepository, workspace::WorkspaceRepository,
};
use crate::model::{
    account::CreateAccountParam, base::CreateBaseParam, membership::CreateMembershipParam,
    membership::Role, workspace::CreateWorkspaceParam,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod base;
mod namespace;
