#![cfg_attr(not(test), forbid(unsafe_code))]

//! Shared request/response models for the AutoService client and API.

pub mod models;
