use crate::database::in_memory::{InMemoryRoomRepository, UnavailableRoomRepository};
use crate::database::sqlite::SqliteRoomRepository;
use crate::database::sqlite::test_utils::database;
use crate::room::model::{ExistingRoom, NewRoom};
use crate::server::rest_api::models::CreationResponse;
use crate::server_tests::start_test_server;
use crate::server_tests::test_client::TestClient;
use reqwest::StatusCode;
use std::sync::Arc;
use uuid::Uuid;

const BELYASH_JSON: &str = r#"
{
	"name":"Belyash",
	"capacity":5,
	"office":"BC Utopia",
	"stage":20,
	"labels":["video","projector"]
}"#;

fn belyash() -> NewRoom {
	NewRoom {
		name: "Belyash".to_owned(),
		capacity: 5,
		office: "BC Utopia".to_owned(),
		stage: 20,
		labels: vec!["video".to_owned(), "projector".to_owned()],
	}
}

async fn in_memory_server() -> TestClient {
	start_test_server(Arc::new(InMemoryRoomRepository::default())).await
}

async fn create_belyash(client: &TestClient) -> Uuid {
	let response = client
		.post("/rooms/create")
		.body(BELYASH_JSON)
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::OK, response.status());

	let CreationResponse { id } = response
		.json::<CreationResponse>()
		.await
		.expect("Failed to parse creation response");
	id
}

async fn list_rooms(client: &TestClient) -> Vec<ExistingRoom> {
	let response = client.get("/rooms/").send().await.expect("Request failed.");
	assert_eq!(StatusCode::OK, response.status());

	response
		.json::<Vec<ExistingRoom>>()
		.await
		.expect("Failed to parse room list")
}

#[tokio::test]
async fn should_list_rooms() {
	let room_id = Uuid::new_v4();
	let client = start_test_server(Arc::new(InMemoryRoomRepository::with_rooms([
		belyash().into_existing(room_id)
	])))
	.await;

	let response = client.get("/rooms").send().await.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	assert_eq!(
		Some("application/json"),
		response
			.headers()
			.get("content-type")
			.and_then(|value| value.to_str().ok())
	);
	assert_eq!(
		format!(
			r#"[{{"id":"{room_id}","name":"Belyash","capacity":5,"office":"BC Utopia","stage":20,"labels":["video","projector"]}}]"#
		),
		response.text().await.expect("Failed to read body")
	);
}

#[tokio::test]
async fn should_list_no_rooms_as_empty_array() {
	let client = in_memory_server().await;

	let response = client.get("/rooms/").send().await.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	assert_eq!("[]", response.text().await.expect("Failed to read body"));
}

#[tokio::test]
async fn should_create_room() {
	let client = in_memory_server().await;

	let room_id = create_belyash(&client).await;

	assert_eq!(vec![belyash().into_existing(room_id)], list_rooms(&client).await);
}

#[tokio::test]
async fn should_respond_with_minted_id_only() {
	let client = in_memory_server().await;

	let response = client
		.post("/rooms/create")
		.body(r#"{"id":"chosen-by-client","name":"A","capacity":1,"office":"B"}"#)
		.send()
		.await
		.expect("Request failed.");
	let body = response.text().await.expect("Failed to read body");
	let rooms = list_rooms(&client).await;

	let [room] = rooms.as_slice() else {
		panic!("Expected exactly one room, got {rooms:?}");
	};
	assert_eq!(format!(r#"{{"id":"{}"}}"#, room.id), body);
	assert_ne!("chosen-by-client", room.id);
}

#[tokio::test]
async fn should_reject_room_with_empty_name() {
	let client = in_memory_server().await;

	let response = client
		.post("/rooms/create")
		.body(r#"{"name":"","capacity":5,"office":"X","stage":0,"labels":[]}"#)
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	assert_eq!(
		"room name can't be empty",
		response.text().await.expect("Failed to read body")
	);
	assert!(list_rooms(&client).await.is_empty());
}

#[tokio::test]
async fn should_reject_room_with_misspelled_field() {
	let client = in_memory_server().await;

	let response = client
		.post("/rooms/create")
		.body(r#"{"names":"Belyash","capacity":5,"office":"BC Utopia","stage":20,"labels":["video","projector"]}"#)
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	assert_eq!(
		"room name can't be empty",
		response.text().await.expect("Failed to read body")
	);
}

#[tokio::test]
async fn should_reject_room_without_capacity_before_checking_name() {
	let client = in_memory_server().await;

	let response = client
		.post("/rooms/create")
		.body(r#"{"name":"","capacity":0,"office":""}"#)
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	assert_eq!(
		"room can't have 0 or less capacity",
		response.text().await.expect("Failed to read body")
	);
}

#[tokio::test]
async fn should_reject_malformed_json() {
	let client = in_memory_server().await;

	let response = client
		.post("/rooms/create")
		.body(r#"{"name":"Belyash","#)
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	let body = response.text().await.expect("Failed to read body");
	assert!(body.starts_with("can't deserialize room: "), "Unexpected body: {body}");
}

#[tokio::test]
async fn should_update_room() {
	let client = in_memory_server().await;
	let room_id = create_belyash(&client).await;

	let updated_room = ExistingRoom {
		name: "Chak-chak".to_owned(),
		capacity: 12,
		labels: Vec::new(),
		..belyash().into_existing(room_id)
	};
	let response = client
		.post("/rooms/update")
		.json(&updated_room)
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	assert_eq!("", response.text().await.expect("Failed to read body"));
	assert_eq!(vec![updated_room], list_rooms(&client).await);
}

#[tokio::test]
async fn should_reject_update_with_empty_id() {
	let client = in_memory_server().await;

	let response = client
		.post("/rooms/update")
		.body(r#"{"id":"","name":"A","capacity":1,"office":"B","stage":0,"labels":[]}"#)
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	assert_eq!(
		"room id can't be empty",
		response.text().await.expect("Failed to read body")
	);
}

#[tokio::test]
async fn should_reject_update_without_id() {
	let client = in_memory_server().await;

	let response = client
		.post("/rooms/update")
		.body(BELYASH_JSON.replace("\"name\"", "\"names\""))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	assert_eq!(
		"room id can't be empty",
		response.text().await.expect("Failed to read body")
	);
}

#[tokio::test]
async fn should_not_find_unknown_room_on_update() {
	let client = in_memory_server().await;

	let response = client
		.post("/rooms/update")
		.json(&belyash().into_existing(Uuid::new_v4()))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[tokio::test]
async fn should_delete_room() {
	let client = in_memory_server().await;
	let room_id = create_belyash(&client).await;

	let response = client
		.delete(&format!("/rooms/{room_id}"))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	assert_eq!("", response.text().await.expect("Failed to read body"));
	assert!(list_rooms(&client).await.is_empty());
}

#[tokio::test]
async fn should_reject_delete_with_malformed_id() {
	let client = in_memory_server().await;

	let response = client
		.delete("/rooms/not-a-uuid")
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
}

#[tokio::test]
async fn should_reject_delete_of_reserved_room_paths() {
	let client = in_memory_server().await;
	create_belyash(&client).await;

	for path in ["/rooms/create", "/rooms/update"] {
		let response = client.delete(path).send().await.expect("Request failed.");

		assert_eq!(StatusCode::BAD_REQUEST, response.status(), "DELETE {path}");
	}
	assert_eq!(1, list_rooms(&client).await.len());
}

#[tokio::test]
async fn should_update_room_addressed_by_uppercase_id() {
	let database = database().await;
	let client = start_test_server(Arc::new(SqliteRoomRepository::new(&database))).await;
	let room_id = create_belyash(&client).await;

	let response = client
		.post("/rooms/update")
		.json(&ExistingRoom {
			id: room_id.to_string().to_uppercase(),
			name: "Chak-chak".to_owned(),
			..belyash().into_existing(room_id)
		})
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	assert_eq!(
		vec![ExistingRoom {
			name: "Chak-chak".to_owned(),
			..belyash().into_existing(room_id)
		}],
		list_rooms(&client).await
	);
}

#[tokio::test]
async fn should_accept_null_labels() {
	let client = in_memory_server().await;

	let response = client
		.post("/rooms/create")
		.body(r#"{"name":"A","capacity":1,"office":"B","stage":0,"labels":null}"#)
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	let rooms = list_rooms(&client).await;
	let [room] = rooms.as_slice() else {
		panic!("Expected exactly one room, got {rooms:?}");
	};
	assert!(room.labels.is_empty());
}

#[tokio::test]
async fn should_report_null_name_as_empty() {
	let client = in_memory_server().await;

	let response = client
		.post("/rooms/create")
		.body(r#"{"name":null,"capacity":1,"office":"B","stage":0,"labels":[]}"#)
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	assert_eq!(
		"room name can't be empty",
		response.text().await.expect("Failed to read body")
	);
}

#[tokio::test]
async fn should_not_find_unknown_room_on_delete() {
	let client = in_memory_server().await;

	let response = client
		.delete(&format!("/rooms/{}", Uuid::new_v4()))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[tokio::test]
async fn should_hide_store_failures() {
	let client = start_test_server(Arc::new(UnavailableRoomRepository)).await;

	let list = client.get("/rooms/").send().await.expect("Request failed.");
	let create = client
		.post("/rooms/create")
		.body(BELYASH_JSON)
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, list.status());
	assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, create.status());
	assert_eq!("", create.text().await.expect("Failed to read body"));
}

#[tokio::test]
async fn should_validate_before_touching_the_store() {
	let client = start_test_server(Arc::new(UnavailableRoomRepository)).await;

	let response = client
		.post("/rooms/create")
		.body(r#"{"name":"Belyash","capacity":5,"office":""}"#)
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	assert_eq!(
		"room office can't be empty",
		response.text().await.expect("Failed to read body")
	);
}

#[tokio::test]
async fn should_manage_rooms_in_sqlite() {
	let database = database().await;
	let client = start_test_server(Arc::new(SqliteRoomRepository::new(&database))).await;

	let room_id = create_belyash(&client).await;
	assert_eq!(vec![belyash().into_existing(room_id)], list_rooms(&client).await);

	let moved_room = ExistingRoom {
		office: "FoodCourt".to_owned(),
		stage: -2,
		..belyash().into_existing(room_id)
	};
	let update = client
		.post("/rooms/update")
		.json(&moved_room)
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::OK, update.status());
	assert_eq!(vec![moved_room], list_rooms(&client).await);

	let delete = client
		.delete(&format!("/rooms/{room_id}"))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::OK, delete.status());
	assert!(list_rooms(&client).await.is_empty());
}
