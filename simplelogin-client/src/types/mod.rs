//! Resource entities mirroring the service's JSON shapes.
//!
//! Records carry no identity beyond their server-assigned numeric id and are
//! never mutated locally; every change is a round trip.

mod alias;
mod contact;
mod domain;
mod mailbox;
mod setting;
mod user;

pub use alias::{
    Alias, AliasActivity, AliasFilter, AliasOptions, AliasSuffix, AliasUpdate, NewCustomAlias,
    RandomAliasMode,
};
pub use contact::{Contact, CreatedContact};
pub use domain::{CustomDomain, DomainUpdate, TrashAlias};
pub use mailbox::{CreatedMailbox, Mailbox};
pub use setting::{
    AliasGenerator, RandomAliasSuffix, SenderFormat, Setting, SettingDomain, SettingUpdate,
};
pub use user::{Stats, UserInfo, UserInfoUpdate};

pub(crate) use alias::{ActivityPage, AliasPage, AliasToggleResponse, DeletedResponse};
pub(crate) use contact::{ContactBlockResponse, ContactPage};
pub(crate) use domain::{CustomDomainList, TrashList};
pub(crate) use mailbox::{MailboxDelete, MailboxList};
pub(crate) use user::{LoginRequest, LoginResponse};
