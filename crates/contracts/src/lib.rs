//! Wire contracts between the RAG chat client and its backend.
//!
//! The backend itself lives outside this workspace; everything here describes
//! what goes over the wire and how a raw HTTP reply is classified.

pub mod shared;
pub mod usecases;
