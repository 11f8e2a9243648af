use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

#[derive(Deserialize)]
pub struct CreateFood {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct UpdateFood {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Insertion-ordered table plus the next id to hand out. Ids start at 1.
pub struct Table {
    foods: Vec<Food>,
    next_id: u64,
}

pub type Db = Arc<RwLock<Table>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Table {
        foods: Vec::new(),
        next_id: 1,
    }));
    Router::new()
        .route("/foods", get(list_foods).post(create_food))
        .route("/foods/{id}", get(get_food).put(update_food).delete(delete_food))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_foods(State(db): State<Db>) -> Json<Vec<Food>> {
    let table = db.read().await;
    Json(table.foods.clone())
}

async fn create_food(
    State(db): State<Db>,
    Json(input): Json<CreateFood>,
) -> (StatusCode, Json<Food>) {
    let mut table = db.write().await;
    let food = Food {
        id: table.next_id,
        name: input.name,
        image: input.image,
        price: input.price,
        description: input.description,
        // The create form cannot set availability; new plates start available.
        available: true,
    };
    table.next_id += 1;
    table.foods.push(food.clone());
    (StatusCode::CREATED, Json(food))
}

async fn get_food(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Food>, StatusCode> {
    let table = db.read().await;
    table
        .foods
        .iter()
        .find(|f| f.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_food(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateFood>,
) -> Result<Json<Food>, StatusCode> {
    let mut table = db.write().await;
    let food = table
        .foods
        .iter_mut()
        .find(|f| f.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        food.name = name;
    }
    if let Some(image) = input.image {
        food.image = image;
    }
    if let Some(price) = input.price {
        food.price = price;
    }
    if let Some(description) = input.description {
        food.description = description;
    }
    if let Some(available) = input.available {
        food.available = available;
    }
    Ok(Json(food.clone()))
}

async fn delete_food(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut table = db.write().await;
    let before = table.foods.len();
    table.foods.retain(|f| f.id != id);
    if table.foods.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}
