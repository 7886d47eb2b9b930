//! Handler for the `/structure` navigation payload.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use promptdeck_core::types::DbId;
use promptdeck_db::repositories::{DomainRepo, PromptRepo, SubtopicRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StructureDomain {
    pub id: DbId,
    pub name: String,
    pub subtopics: Vec<StructureSubtopic>,
}

#[derive(Debug, Serialize)]
pub struct StructureSubtopic {
    pub id: DbId,
    pub name: String,
    pub prompts: Vec<StructurePrompt>,
}

#[derive(Debug, Serialize)]
pub struct StructurePrompt {
    pub id: DbId,
    pub title: String,
}

/// GET /api/v1/structure
///
/// Returns the full domain/subtopic/prompt hierarchy in one payload: domains
/// ordered by name, subtopics and prompt titles ordered case-insensitively.
pub async fn get_structure(State(state): State<AppState>) -> AppResult<Json<Vec<StructureDomain>>> {
    let domains = DomainRepo::list_all(&state.pool).await?;
    let subtopics = SubtopicRepo::list_all(&state.pool).await?;
    let prompts = PromptRepo::list_refs(&state.pool).await?;

    // Group prompts under their subtopic; the queries already deliver each
    // level in its display order.
    let mut prompts_by_subtopic: HashMap<DbId, Vec<StructurePrompt>> = HashMap::new();
    for prompt in prompts {
        prompts_by_subtopic
            .entry(prompt.subtopic_id)
            .or_default()
            .push(StructurePrompt {
                id: prompt.id,
                title: prompt.title,
            });
    }

    let mut subtopics_by_domain: HashMap<DbId, Vec<StructureSubtopic>> = HashMap::new();
    for subtopic in subtopics {
        subtopics_by_domain
            .entry(subtopic.domain_id)
            .or_default()
            .push(StructureSubtopic {
                id: subtopic.id,
                name: subtopic.name,
                prompts: prompts_by_subtopic.remove(&subtopic.id).unwrap_or_default(),
            });
    }

    let payload = domains
        .into_iter()
        .map(|domain| StructureDomain {
            subtopics: subtopics_by_domain.remove(&domain.id).unwrap_or_default(),
            id: domain.id,
            name: domain.name,
        })
        .collect();

    Ok(Json(payload))
}
