//! Per-operation authorization decisions for exercises.
//!
//! Every function here is pure: it looks only at the caller's identity (if
//! any) and the stored record, and either denies the operation or says which
//! fields the operation may touch. Existence checks (404) happen in the
//! handlers before these run.

use crate::{
    error::ApiError,
    exercises::{
        dto::UpdateExerciseRequest,
        repo::{Exercise, ExercisePatch},
    },
};

/// Public exercises are readable by anyone, including anonymous callers.
/// Private ones only by their creator.
pub fn authorize_view(caller: Option<i64>, exercise: &Exercise) -> Result<(), ApiError> {
    if exercise.is_public || caller == Some(exercise.created_by) {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "You are not authorized to view this exercise",
        ))
    }
}

/// Decides whether the caller may update the exercise and which fields the
/// resulting patch may carry.
///
/// The branch is selected by the `isPublic` flag declared in the request
/// body, not by the stored record's flag:
/// - declared public: only `description` and `difficulty` pass through, and
///   no ownership check runs at all;
/// - declared private (or flag absent): the caller must be the creator, and
///   `name`, `description` and `difficulty` each pass through when supplied.
///
/// Neither branch ever changes `is_public` or `created_by`.
pub fn plan_update(
    caller: Option<i64>,
    request: &UpdateExerciseRequest,
    exercise: &Exercise,
) -> Result<ExercisePatch, ApiError> {
    if request.is_public.unwrap_or(false) {
        return Ok(ExercisePatch {
            name: None,
            description: request.description.clone(),
            difficulty: request.difficulty.clone(),
        });
    }

    if caller != Some(exercise.created_by) {
        return Err(ApiError::Forbidden(
            "You are not authorized to modify this exercise",
        ));
    }

    Ok(ExercisePatch {
        name: request.name.clone(),
        description: request.description.clone(),
        difficulty: request.difficulty.clone(),
    })
}

/// Public exercises are never deletable, not even by their creator.
/// Private ones may only be deleted by their creator.
pub fn authorize_delete(caller: Option<i64>, exercise: &Exercise) -> Result<(), ApiError> {
    if exercise.is_public {
        return Err(ApiError::Forbidden(
            "You are not authorized to delete this public exercise",
        ));
    }
    if caller != Some(exercise.created_by) {
        return Err(ApiError::Forbidden(
            "You are not authorized to delete this exercise",
        ));
    }
    Ok(())
}
