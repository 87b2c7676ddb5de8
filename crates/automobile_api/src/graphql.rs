//! GraphQL adapter.
//!
//! ```graphql
//! type Automobile { id: ID!, make: String, model: String, year: Int, vin: String }
//!
//! type Query {
//!   automobiles: [Automobile!]!
//!   automobile(id: ID!): Automobile
//! }
//!
//! type Mutation {
//!   addAutomobile(make: String, model: String, year: Int, vin: String): Automobile!
//!   updateAutomobile(id: ID!, make: String, model: String, year: Int, vin: String): Automobile
//!   deleteAutomobile(id: ID!): String!
//! }
//! ```
//!
//! Resolvers pass straight through to `AutomobileService`. Failures use the
//! default `errors` array of the response.

use crate::error::ApiError;
use crate::state::AppState;
use async_graphql::http::{parse_query_string, GraphiQLSource};
use async_graphql::parser::{parse_query, types::OperationType};
use async_graphql::{Context, EmptySubscription, Object, Schema, ServerError, SimpleObject, ID};
use automobile_core::{Automobile, AutomobileId, AutomobileInput};
use axum::extract::State;
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

pub const GRAPHQL_PATH: &str = "/graphql";

pub type AutomobileSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// GraphQL view of an automobile record.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Automobile")]
pub struct AutomobileObject {
    pub id: ID,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub vin: Option<String>,
}

impl From<Automobile> for AutomobileObject {
    fn from(value: Automobile) -> Self {
        Self {
            id: ID(value.id.to_string()),
            make: value.make,
            model: value.model,
            year: value.year,
            vin: value.vin,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every automobile, in insertion order.
    async fn automobiles(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<AutomobileObject>> {
        let automobiles = ctx
            .data::<AppState>()?
            .run(|service| service.list_all())
            .await?;
        Ok(automobiles.into_iter().map(AutomobileObject::from).collect())
    }

    /// One automobile, or `null` when the id is unknown.
    async fn automobile(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<AutomobileObject>> {
        let id = parse_id(&id)?;
        let automobile = ctx
            .data::<AppState>()?
            .run(move |service| service.get_by_id(id))
            .await?;
        Ok(automobile.map(AutomobileObject::from))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_automobile(
        &self,
        ctx: &Context<'_>,
        make: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        vin: Option<String>,
    ) -> async_graphql::Result<AutomobileObject> {
        let input = AutomobileInput {
            make,
            model,
            year,
            vin,
        };
        let created = ctx
            .data::<AppState>()?
            .run(move |service| service.create(&input))
            .await?;
        Ok(created.into())
    }

    /// Full replace; omitted arguments are stored as null.
    async fn update_automobile(
        &self,
        ctx: &Context<'_>,
        id: ID,
        make: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        vin: Option<String>,
    ) -> async_graphql::Result<Option<AutomobileObject>> {
        let id = parse_id(&id)?;
        let input = AutomobileInput {
            make,
            model,
            year,
            vin,
        };
        let updated = ctx
            .data::<AppState>()?
            .run(move |service| service.update(id, &input))
            .await?;
        Ok(updated.map(AutomobileObject::from))
    }

    async fn delete_automobile(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<String> {
        let id = parse_id(&id)?;
        let confirmation = ctx
            .data::<AppState>()?
            .run(move |service| service.delete_by_id(id))
            .await?;
        Ok(confirmation.message)
    }
}

/// Builds the executable schema with `state` attached as context data.
pub fn build_schema(state: AppState) -> AutomobileSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// `POST /graphql` and `GET /graphql?query=...` execute; a bare
/// `GET /graphql` serves GraphiQL.
pub fn router(schema: AutomobileSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_handler))
        .with_state(schema)
}

async fn graphql_handler(
    State(schema): State<AutomobileSchema>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(schema.execute(request).await)
}

async fn graphql_get(State(schema): State<AutomobileSchema>, uri: Uri) -> Response {
    let Some(query) = uri.query().filter(|query| !query.is_empty()) else {
        return Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response();
    };

    let response = match parse_query_string(query) {
        Ok(request) if is_mutation(&request.query) => {
            error_response("mutations must be sent with POST")
        }
        Ok(request) => schema.execute(request).await,
        Err(err) => error_response(err.to_string()),
    };
    Json(response).into_response()
}

/// Syntax errors are left for execution to report.
fn is_mutation(query: &str) -> bool {
    parse_query(query).is_ok_and(|document| {
        document
            .operations
            .iter()
            .any(|(_, operation)| operation.node.ty == OperationType::Mutation)
    })
}

fn error_response(message: impl Into<String>) -> async_graphql::Response {
    async_graphql::Response::from_errors(vec![ServerError::new(message, None)])
}

fn parse_id(id: &ID) -> Result<AutomobileId, ApiError> {
    id.as_str()
        .trim()
        .parse::<i64>()
        .map(AutomobileId)
        .map_err(|_| ApiError::request(format!("invalid automobile id `{}`", id.as_str())))
}
