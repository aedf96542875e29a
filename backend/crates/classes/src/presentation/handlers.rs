//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{
    CreateClassUseCase, JoinClassUseCase, ListClassesUseCase, RenameClassUseCase,
};
use crate::domain::entity::Class;
use crate::domain::repository::ClassRepository;
use crate::error::ClassResult;
use crate::presentation::dto::{
    ClassesQuery, InsertClassRequest, InsertClassResponse, JoinClassRequest, MembersQuery,
    MembersResponse, RenameClassRequest,
};
use kernel::id::{FacultyId, StudentId};

/// Shared state for class handlers
#[derive(Clone)]
pub struct ClassAppState<C>
where
    C: ClassRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<C>,
}

/// POST /insert
pub async fn insert_class<C>(
    State(state): State<ClassAppState<C>>,
    Json(req): Json<InsertClassRequest>,
) -> ClassResult<Json<InsertClassResponse>>
where
    C: ClassRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateClassUseCase::new(state.repo.clone());

    let code = use_case
        .execute(req.entity_id, req.name, req.is_student)
        .await?;

    Ok(Json(InsertClassResponse { code }))
}

/// POST /join
pub async fn join_class<C>(
    State(state): State<ClassAppState<C>>,
    Json(req): Json<JoinClassRequest>,
) -> ClassResult<StatusCode>
where
    C: ClassRepository + Clone + Send + Sync + 'static,
{
    let use_case = JoinClassUseCase::new(state.repo.clone());

    use_case
        .execute(req.entity_id, &req.code, req.is_student)
        .await?;

    Ok(StatusCode::CREATED)
}

/// PUT /name
pub async fn rename_class<C>(
    State(state): State<ClassAppState<C>>,
    Json(req): Json<RenameClassRequest>,
) -> ClassResult<StatusCode>
where
    C: ClassRepository + Clone + Send + Sync + 'static,
{
    let use_case = RenameClassUseCase::new(state.repo.clone());

    use_case
        .execute(req.id, req.entity_id, req.is_student, &req.new_name)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /members
pub async fn class_members<C>(
    State(state): State<ClassAppState<C>>,
    Query(query): Query<MembersQuery>,
) -> ClassResult<Json<MembersResponse>>
where
    C: ClassRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListClassesUseCase::new(state.repo.clone());

    let student_ids = use_case.members(query.id).await?;

    Ok(Json(MembersResponse { student_ids }))
}

/// GET /all
pub async fn all_classes<C>(
    State(state): State<ClassAppState<C>>,
    Query(query): Query<ClassesQuery>,
) -> ClassResult<Json<Vec<Class>>>
where
    C: ClassRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListClassesUseCase::new(state.repo.clone());

    let classes = if query.is_student {
        use_case
            .for_student(StudentId::from_uuid(query.entity_id))
            .await?
    } else {
        use_case
            .for_faculty(FacultyId::from_uuid(query.entity_id))
            .await?
    };

    Ok(Json(classes))
}
