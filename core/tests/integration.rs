//! Full dashboard lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, implements `FoodsApi` over ureq
//! with the sans-IO `FoodsClient`, and drives every dashboard operation
//! end-to-end over real HTTP. Validates request building, response parsing,
//! and local reconciliation against the actual server.

use foods_core::{
    ApiError, Dashboard, Food, FoodDraft, FoodPatch, FoodsApi, FoodsClient, HttpMethod,
    HttpRequest, HttpResponse,
};

/// `FoodsApi` over ureq, executing `FoodsClient` requests on the wire.
struct HttpFoodsApi {
    client: FoodsClient,
    agent: ureq::Agent,
}

impl HttpFoodsApi {
    fn new(base_url: &str) -> Self {
        // Disable ureq's automatic status-code-as-error behavior so 4xx/5xx
        // responses come back as data and the core's status mapping applies.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            client: FoodsClient::new(base_url),
            agent,
        }
    }

    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

impl FoodsApi for HttpFoodsApi {
    fn list(&self) -> Result<Vec<Food>, ApiError> {
        let req = self.client.build_list_foods();
        self.client.parse_list_foods(self.execute(req)?)
    }

    fn create(&self, draft: &FoodDraft) -> Result<Food, ApiError> {
        let req = self.client.build_create_food(draft)?;
        self.client.parse_create_food(self.execute(req)?)
    }

    fn update(&self, id: u64, patch: &FoodPatch) -> Result<Food, ApiError> {
        let req = self.client.build_update_food(id, patch)?;
        self.client.parse_update_food(self.execute(req)?)
    }

    fn delete(&self, id: u64) -> Result<(), ApiError> {
        let req = self.client.build_delete_food(id);
        self.client.parse_delete_food(self.execute(req)?)
    }
}

fn spawn_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn draft(name: &str, price: &str) -> FoodDraft {
    FoodDraft {
        name: name.to_string(),
        image: format!("http://example.com/{name}.png"),
        price: price.to_string(),
        description: format!("{name} plate"),
    }
}

#[test]
fn dashboard_lifecycle() {
    let addr = spawn_server();
    let base_url = format!("http://{addr}");
    let probe = HttpFoodsApi::new(&base_url);
    let mut dash = Dashboard::new(HttpFoodsApi::new(&base_url));

    // Step 1: initial load — nothing on the server yet.
    dash.load();
    assert!(dash.foods().is_empty(), "expected empty dashboard");

    // Step 2: create two plates; the newer one renders first.
    dash.add_food(&draft("Burger", "9.90"));
    dash.add_food(&draft("Salad", "5.00"));
    assert_eq!(dash.foods().len(), 2);
    assert_eq!(dash.foods()[0].name, "Salad");
    assert_eq!(dash.foods()[1].name, "Burger");
    assert!(dash.foods().iter().all(|f| f.available));
    let burger_id = dash.foods()[1].id;
    let salad_id = dash.foods()[0].id;
    assert_ne!(burger_id, salad_id);

    // Step 3: edit the burger through the selection flow.
    let burger = dash.foods()[1].clone();
    dash.select_for_edit(burger);
    assert!(dash.is_edit_modal_open());
    dash.update_food(&draft("Burger deluxe", "12.00"));
    assert_eq!(dash.foods()[1].name, "Burger deluxe");
    assert_eq!(dash.foods()[1].price, "12.00");
    assert_eq!(dash.foods()[1].id, burger_id);
    assert!(dash.foods()[1].available, "edit submit never touches availability");

    // Step 4: the server saw the same merge.
    let fresh = probe.list().unwrap();
    let server_burger = fresh.iter().find(|f| f.id == burger_id).unwrap();
    assert_eq!(server_burger.name, "Burger deluxe");
    assert!(server_burger.available);

    // Step 5: toggle availability off, then back on.
    let mut flipped = dash.foods()[1].clone();
    flipped.available = false;
    dash.toggle_available(&flipped);
    assert!(!dash.foods()[1].available);

    flipped.available = true;
    dash.toggle_available(&flipped);
    assert!(dash.foods()[1].available);
    assert_eq!(dash.foods()[1].name, "Burger deluxe", "toggle perturbs nothing else");

    // Step 6: delete the salad.
    dash.delete_food(salad_id);
    assert_eq!(dash.foods().len(), 1);
    assert_eq!(dash.foods()[0].id, burger_id);

    // Step 7: a fresh load agrees with the reconciled local state.
    let before = dash.foods().to_vec();
    dash.load();
    assert_eq!(dash.foods(), before);
}

#[test]
fn unreachable_server_leaves_state_untouched() {
    // Nothing listens here; every call fails at the transport and the
    // dashboard swallows it.
    let api = HttpFoodsApi::new("http://127.0.0.1:1");
    let mut dash = Dashboard::new(api);

    dash.load();
    assert!(dash.foods().is_empty());

    dash.add_food(&draft("Ghost", "0.00"));
    assert!(dash.foods().is_empty());

    dash.delete_food(1);
    assert!(dash.foods().is_empty());
}
