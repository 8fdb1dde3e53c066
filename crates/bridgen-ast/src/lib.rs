#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! File-level declaration AST for generated facade source, plus a plain-text
//! renderer.
//!
//! The transformation engine builds [`File`] values; nothing in the AST knows
//! how the file becomes text. [`render`] is the one rendering backend:
//! alphabetized imports, simple names where an import (or the file itself)
//! provides them, fully-qualified names on collision.

pub mod ast;
pub mod render;


pub use ast::{
    Body, Constructor, CtorParam, File, Function, Import, Modifier, Param, Property,
    PropertyBinding, SecondaryConstructor, Setter, SupertypeClause, TypeDecl, TypeKind,
};
pub use render::render;
