//! Bilingual portfolio content service.
//!
//! Route loaders fetch portfolio records from a hosted Supabase project,
//! shape them into view models and enforce the admin session gate; a single
//! proxy endpoint asks an external language model for a technology's brand
//! color. All persistence, querying and authentication is delegated to the
//! remote services - this crate is the glue between them and the rendering
//! layer.

pub mod auth;
pub mod color;
pub mod config;
pub mod cursor;
pub mod error;
pub mod i18n;
pub mod loaders;
pub mod models;
pub mod routes;
pub mod supabase;
