//! Common type definitions shared by the API and database layers.
//!
//! # ID Types
//!
//! Records are keyed by SQLite integer primary keys, wrapped in type aliases:
//!
//! - [`ItemId`]: Item identifier
//! - [`CategoryId`]: Category identifier
//!
//! # Resources and operations
//!
//! [`Resource`] and [`Operation`] name what a request touches and what it does to it. Errors
//! carry both so that the user-facing message can be phrased for the right resource.

use std::fmt;

// Type aliases for IDs
pub type ItemId = i64;
pub type CategoryId = i64;

/// Largest identifier a client may assign through an update (2^53 - 1, exact as a JSON number
/// everywhere). Rows above it would move the `AUTOINCREMENT` sequence close enough to `i64::MAX`
/// to make later creates fail.
pub const MAX_CLIENT_ID: i64 = (1 << 53) - 1;

/// The managed entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Item,
    Category,
}

impl Resource {
    /// Message returned when a lookup finds no record
    pub fn not_found_message(self) -> &'static str {
        match self {
            Resource::Item => "Item não encontrado",
            Resource::Category => "Categoria não encontrada",
        }
    }

    /// Message returned when a request body can't be decoded into the resource's shape
    pub fn decode_failure_message(self) -> &'static str {
        match self {
            Resource::Item => "Erro ao decodificar o item",
            Resource::Category => "Erro ao decodificar a categoria",
        }
    }

    /// Message returned when an update body carries no usable identifier
    pub fn missing_id_message(self) -> &'static str {
        match self {
            Resource::Item => "ID do item não fornecido",
            Resource::Category => "ID da categoria não fornecido",
        }
    }

    /// Confirmation returned by a successful delete
    pub fn deleted_message(self) -> &'static str {
        match self {
            Resource::Item => "Item deletado com sucesso",
            Resource::Category => "Categoria deletada com sucesso",
        }
    }

    /// Message returned when the database fails while performing `operation`
    pub fn failure_message(self, operation: Operation) -> &'static str {
        match (self, operation) {
            (Resource::Item, Operation::List) => "Erro ao buscar itens",
            (Resource::Item, Operation::Get) => "Erro ao buscar o item",
            (Resource::Item, Operation::Create) => "Erro ao criar o item",
            (Resource::Item, Operation::Update) => "Erro ao atualizar o item",
            (Resource::Item, Operation::Delete) => "Erro ao deletar o item",
            (Resource::Category, Operation::List) => "Erro ao buscar categorias",
            (Resource::Category, Operation::Get) => "Erro ao buscar a categoria",
            (Resource::Category, Operation::Create) => "Erro ao criar a categoria",
            (Resource::Category, Operation::Update) => "Erro ao atualizar a categoria",
            (Resource::Category, Operation::Delete) => "Erro ao deletar a categoria",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Item => write!(f, "item"),
            Resource::Category => write!(f, "category"),
        }
    }
}

/// Operations that can be performed on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::List => write!(f, "list"),
            Operation::Get => write!(f, "get"),
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}
