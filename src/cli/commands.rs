use std::io::{self, Write};

use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use super::{Command, EditArgs};
use crate::creators::{CatalogError, CreatorClient, CreatorDraft, CreatorId};
use crate::seed::{self, SeedError};
use crate::store::TableStore;
use crate::view::{render_detail, render_list, CatalogView};

/// Errors surfaced to the user by a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("Creator not found")]
    NotFound { id: CreatorId },

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run one command against the store, writing results to `out`.
///
/// `confirm` is asked before destructive commands unless `--yes` was
/// given; a `false` answer cancels the command without error.
pub async fn execute<S, W, C>(
    command: &Command,
    json: bool,
    client: &CreatorClient<S>,
    out: &mut W,
    mut confirm: C,
) -> Result<(), CommandError>
where
    S: TableStore,
    W: Write,
    C: FnMut(&str) -> io::Result<bool>,
{
    match command {
        Command::List => {
            let mut view = CatalogView::new();
            view.refresh(client).await?;
            if json {
                write_json(out, view.records())?;
            } else {
                write!(out, "{}", render_list(view.records()))?;
            }
        }
        Command::Show { id } => {
            let record = client
                .get_by_id(*id)
                .await?
                .ok_or(CommandError::NotFound { id: *id })?;
            if json {
                write_json(out, &record)?;
            } else {
                write!(out, "{}", render_detail(&record))?;
            }
        }
        Command::Add(args) => {
            let draft = CreatorDraft::new(
                args.name.as_str(),
                args.url.as_str(),
                args.description.as_str(),
                args.image_url.as_str(),
            );
            let record = client.create(&draft).await?;
            if json {
                write_json(out, &record)?;
            } else {
                writeln!(out, "Created creator {} ({})", record.id, record.name)?;
            }
        }
        Command::Edit(args) => {
            let current = client
                .get_by_id(args.id)
                .await?
                .ok_or(CommandError::NotFound { id: args.id })?;
            let draft = apply_edits(CreatorDraft::from_record(&current), args);
            let record = client.update(args.id, &draft).await?;
            if json {
                write_json(out, &record)?;
            } else {
                writeln!(out, "Updated creator {} ({})", record.id, record.name)?;
            }
        }
        Command::Delete { id, yes } => {
            if !yes && !confirm("Are you sure you want to delete this creator?")? {
                return write_cancelled(out, json);
            }
            // The store does not report whether a row matched.
            client.delete_by_id(*id).await?;
            if json {
                write_json(out, &json!({ "id": id, "status": "delete_accepted" }))?;
            } else {
                writeln!(out, "Delete request for creator {} accepted", id)?;
            }
        }
        Command::Seed { yes } => {
            if !yes && !confirm("This replaces every creator with the sample set. Continue?")? {
                return write_cancelled(out, json);
            }
            let records = seed::seed(client).await?;
            if json {
                write_json(out, &records)?;
            } else {
                writeln!(out, "Database seeded with {} creators", records.len())?;
            }
        }
    }
    Ok(())
}

/// Overlay the given flags on a draft prefilled from the stored record.
fn apply_edits(mut draft: CreatorDraft, args: &EditArgs) -> CreatorDraft {
    if let Some(name) = &args.name {
        draft.name = name.clone();
    }
    if let Some(url) = &args.url {
        draft.url = url.clone();
    }
    if let Some(description) = &args.description {
        draft.description = description.clone();
    }
    if let Some(image_url) = &args.image_url {
        draft.image_url = image_url.clone();
    }
    draft
}

fn write_cancelled<W: Write>(out: &mut W, json: bool) -> Result<(), CommandError> {
    if json {
        write_json(out, &json!({ "cancelled": true }))
    } else {
        writeln!(out, "Cancelled")?;
        Ok(())
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CommandError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
