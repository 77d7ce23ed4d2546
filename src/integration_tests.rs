#[cfg(test)]
mod tests {
    use crate::actor_framework::{Entity, FrameworkError};
    use crate::app_system::StoreSystem;
    use crate::auth::JwtKeys;
    use crate::clients::{CartClient, OrderClient, ProductClient, UserClient};
    use crate::domain::{
        CartItem, Order, OrderStatus, Product, ProductCreate, Role, User, UserCreate, UserPatch,
    };
    use crate::http::{router, AppState};
    use crate::mock_framework::{
        create_mock_client, expect_action, expect_create, expect_delete, expect_get, expect_list,
        MockGeocoder, MockMailer, MockPaymentGateway,
    };
    use crate::product_actor::ProductAction;
    use chrono::{Duration, Utc};
    use std::sync::Arc;

    fn sample_user(id: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{}@example.com", id),
            password_hash: "x".to_string(),
            name: "Alice".to_string(),
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    fn sample_product(id: &str, price_cents: i64, stock: u32) -> Product {
        Product {
            id: id.to_string(),
            name: "Baroque pearl necklace".to_string(),
            description: String::new(),
            category: "necklaces".to_string(),
            price_cents,
            sizes: vec![],
            stock,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    // =========================================================================
    // Checkout orchestration against mock collection actors
    // =========================================================================

    #[tokio::test]
    async fn test_checkout_flow_against_mocks() {
        let (user_inner, mut user_rx) = create_mock_client::<User>(10);
        let (product_inner, mut product_rx) = create_mock_client::<Product>(10);
        let (cart_inner, mut cart_rx) = create_mock_client::<CartItem>(10);
        let (order_inner, mut order_rx) = create_mock_client::<Order>(10);

        let payment = Arc::new(MockPaymentGateway::default());
        let mailer = Arc::new(MockMailer::default());

        let user_client = UserClient::new(user_inner);
        let product_client = ProductClient::new(product_inner);
        let cart_client = CartClient::new(cart_inner, product_client.clone());
        let order_client = OrderClient::new(
            order_inner,
            user_client,
            product_client,
            cart_client,
            payment.clone(),
            mailer,
        );

        let checkout_task = tokio::spawn(async move {
            order_client
                .checkout("user_1".to_string(), "1 Rue de la Paix".to_string(), None)
                .await
        });

        // 1. User validation
        let (user_id, responder) = expect_get(&mut user_rx).await.expect("Expected User Get");
        assert_eq!(user_id, "user_1");
        responder.send(Ok(Some(sample_user("user_1")))).unwrap();

        // 2. Cart snapshot: one row, qty 2
        let (_, responder) = expect_list(&mut cart_rx).await.expect("Expected Cart List");
        responder
            .send(Ok(vec![CartItem {
                id: "row_1".to_string(),
                user_id: "user_1".to_string(),
                product_id: "product_1".to_string(),
                size: String::new(),
                quantity: 2,
            }]))
            .unwrap();

        // 3. Pricing + stock reservation
        let (product_id, responder) = expect_get(&mut product_rx)
            .await
            .expect("Expected Product Get");
        assert_eq!(product_id, "product_1");
        responder
            .send(Ok(Some(sample_product("product_1", 12_900, 10))))
            .unwrap();

        let (product_id, action, responder) = expect_action(&mut product_rx)
            .await
            .expect("Expected Product Action");
        assert_eq!(product_id, "product_1");
        match action {
            ProductAction::ReserveStock(qty) => assert_eq!(qty, 2),
        }
        responder
            .send(Ok(crate::product_actor::ProductActionResult::Reserved))
            .unwrap();

        // 4. Order persisted (payment already went through the mock gateway)
        let (params, responder) = expect_create(&mut order_rx)
            .await
            .expect("Expected Order Create");
        assert_eq!(params.user_id, "user_1");
        assert_eq!(params.total_cents, 25_800);
        assert_eq!(params.items.len(), 1);
        assert!(params.payment_intent_id.starts_with("pi_test_"));
        let order = Order::from_create_params("order_1".to_string(), params).unwrap();
        responder.send(Ok("order_1".to_string())).unwrap();

        let (order_id, responder) = expect_get(&mut order_rx).await.expect("Expected Order Get");
        assert_eq!(order_id, "order_1");
        responder.send(Ok(Some(order))).unwrap();

        // 5. Cart cleared afterwards
        let (_, responder) = expect_list(&mut cart_rx).await.expect("Expected Cart List");
        responder
            .send(Ok(vec![CartItem {
                id: "row_1".to_string(),
                user_id: "user_1".to_string(),
                product_id: "product_1".to_string(),
                size: String::new(),
                quantity: 2,
            }]))
            .unwrap();
        let (row_id, responder) = expect_delete(&mut cart_rx)
            .await
            .expect("Expected Cart Delete");
        assert_eq!(row_id, "row_1");
        responder.send(Ok(())).unwrap();

        let order = checkout_task.await.unwrap().expect("checkout should succeed");
        assert_eq!(order.id, "order_1");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(*payment.created.lock().unwrap(), vec![25_800]);
    }

    #[tokio::test]
    async fn test_checkout_fails_on_insufficient_stock() {
        let (user_inner, mut user_rx) = create_mock_client::<User>(10);
        let (product_inner, mut product_rx) = create_mock_client::<Product>(10);
        let (cart_inner, mut cart_rx) = create_mock_client::<CartItem>(10);
        let (order_inner, _order_rx) = create_mock_client::<Order>(10);

        let order_client = OrderClient::new(
            order_inner,
            UserClient::new(user_inner),
            ProductClient::new(product_inner.clone()),
            CartClient::new(cart_inner, ProductClient::new(product_inner)),
            Arc::new(MockPaymentGateway::default()),
            Arc::new(MockMailer::default()),
        );

        let checkout_task = tokio::spawn(async move {
            order_client
                .checkout("user_1".to_string(), "1 Rue de la Paix".to_string(), None)
                .await
        });

        let (_, responder) = expect_get(&mut user_rx).await.expect("Expected User Get");
        responder.send(Ok(Some(sample_user("user_1")))).unwrap();

        let (_, responder) = expect_list(&mut cart_rx).await.expect("Expected Cart List");
        responder
            .send(Ok(vec![CartItem {
                id: "row_1".to_string(),
                user_id: "user_1".to_string(),
                product_id: "product_1".to_string(),
                size: String::new(),
                quantity: 5,
            }]))
            .unwrap();

        let (_, responder) = expect_get(&mut product_rx)
            .await
            .expect("Expected Product Get");
        responder
            .send(Ok(Some(sample_product("product_1", 12_900, 1))))
            .unwrap();

        let (_, _, responder) = expect_action(&mut product_rx)
            .await
            .expect("Expected Product Action");
        responder
            .send(Err(FrameworkError::Rejected(
                "Insufficient stock: 1 available, 5 requested".to_string(),
            )))
            .unwrap();

        let err = checkout_task.await.unwrap().unwrap_err();
        assert!(matches!(
            err,
            crate::order_actor::OrderError::InsufficientStock(_)
        ));
    }

    // =========================================================================
    // Full system (real actors, fake integrations)
    // =========================================================================

    struct TestHarness {
        state: AppState,
        payment: Arc<MockPaymentGateway>,
        mailer: Arc<MockMailer>,
    }

    fn harness() -> TestHarness {
        harness_with_payment(Arc::new(MockPaymentGateway::default()))
    }

    fn harness_with_payment(payment: Arc<MockPaymentGateway>) -> TestHarness {
        let mailer = Arc::new(MockMailer::default());
        let system = StoreSystem::new(payment.clone(), mailer.clone());
        let state = AppState::new(
            &system,
            JwtKeys::new("integration-test-secret"),
            Duration::hours(1),
            Arc::new(MockGeocoder::default()),
        );
        // The actors keep running on their spawned tasks; the state's client
        // clones keep the channels open after `system` is dropped.
        TestHarness {
            state,
            payment,
            mailer,
        }
    }

    async fn seed_product(state: &AppState, price_cents: i64, stock: u32) -> String {
        state
            .products
            .create_product(ProductCreate {
                name: "Baroque pearl necklace".to_string(),
                description: "Freshwater pearls".to_string(),
                category: "necklaces".to_string(),
                price_cents,
                sizes: vec![],
                stock,
                image_url: None,
            })
            .await
            .unwrap()
    }

    async fn seed_user(state: &AppState, email: &str) -> String {
        state
            .users
            .create_user(UserCreate {
                email: email.to_string(),
                password_hash: "x".to_string(),
                name: "Alice".to_string(),
                role: Role::User,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let h = harness();
        seed_user(&h.state, "alice@example.com").await;

        let err = h
            .state
            .users
            .create_user(UserCreate {
                email: "alice@example.com".to_string(),
                password_hash: "y".to_string(),
                name: "Other Alice".to_string(),
                role: Role::User,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::user_actor::UserError::AlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_profile_update_rejects_taken_email() {
        let h = harness();
        seed_user(&h.state, "alice@example.com").await;
        let bob = seed_user(&h.state, "bob@example.com").await;

        let err = h
            .state
            .users
            .update_user(
                bob.clone(),
                UserPatch {
                    email: Some("alice@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::user_actor::UserError::AlreadyExists(_)
        ));

        // The uniqueness check is case-insensitive, like the lookup at login
        let err = h
            .state
            .users
            .update_user(
                bob.clone(),
                UserPatch {
                    email: Some("ALICE@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::user_actor::UserError::AlreadyExists(_)
        ));

        // A fresh address still goes through
        let user = h
            .state
            .users
            .update_user(
                bob,
                UserPatch {
                    email: Some("bob@atelier.example".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(user.email, "bob@atelier.example");
    }

    #[tokio::test]
    async fn test_cart_add_merges_same_product_and_size() {
        let h = harness();
        let user_id = seed_user(&h.state, "alice@example.com").await;
        let product_id = seed_product(&h.state, 9_900, 10).await;

        let first = h
            .state
            .cart
            .add_item(user_id.clone(), product_id.clone(), String::new(), 1)
            .await
            .unwrap();
        let merged = h
            .state
            .cart
            .add_item(user_id.clone(), product_id, String::new(), 2)
            .await
            .unwrap();

        assert_eq!(first.id, merged.id);
        assert_eq!(merged.quantity, 3);

        let rows = h.state.cart.list_for_user(user_id).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_cart_rejects_unknown_product_and_bad_size() {
        let h = harness();
        let user_id = seed_user(&h.state, "alice@example.com").await;

        let err = h
            .state
            .cart
            .add_item(user_id.clone(), "ghost".to_string(), String::new(), 1)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::cart_actor::CartError::ValidationError(_)
        ));

        let product_id = seed_product(&h.state, 9_900, 10).await;
        let err = h
            .state
            .cart
            .add_item(user_id, product_id, "52".to_string(), 1)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::cart_actor::CartError::ValidationError(_)
        ));
    }

    #[tokio::test]
    async fn test_checkout_end_to_end_decrements_stock_and_clears_cart() {
        let h = harness();
        let user_id = seed_user(&h.state, "alice@example.com").await;
        let product_id = seed_product(&h.state, 12_900, 5).await;

        h.state
            .cart
            .add_item(user_id.clone(), product_id.clone(), String::new(), 2)
            .await
            .unwrap();

        let order = h
            .state
            .orders
            .checkout(user_id.clone(), "1 Rue de la Paix".to_string(), None)
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_cents, 25_800);
        assert_eq!(order.items.len(), 1);
        assert_eq!(*h.payment.created.lock().unwrap(), vec![25_800]);

        // Stock was reserved
        let product = h.state.products.get_product(product_id).await.unwrap().unwrap();
        assert_eq!(product.stock, 3);

        // Cart is empty again
        let rows = h.state.cart.list_for_user(user_id.clone()).await.unwrap();
        assert!(rows.is_empty());

        // Confirmation email eventually goes out on the background task
        for _ in 0..50 {
            if !h.mailer.sent.lock().unwrap().is_empty() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        let sent = h.mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "alice@example.com");
    }

    #[tokio::test]
    async fn test_checkout_with_empty_cart_fails() {
        let h = harness();
        let user_id = seed_user(&h.state, "alice@example.com").await;

        let err = h
            .state
            .orders
            .checkout(user_id, "1 Rue de la Paix".to_string(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, crate::order_actor::OrderError::EmptyCart));
    }

    #[tokio::test]
    async fn test_checkout_payment_failure_creates_no_order() {
        let h = harness_with_payment(Arc::new(MockPaymentGateway::failing()));
        let user_id = seed_user(&h.state, "alice@example.com").await;
        let product_id = seed_product(&h.state, 12_900, 5).await;

        h.state
            .cart
            .add_item(user_id.clone(), product_id.clone(), String::new(), 1)
            .await
            .unwrap();

        let err = h
            .state
            .orders
            .checkout(user_id.clone(), "1 Rue de la Paix".to_string(), None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::order_actor::OrderError::PaymentFailed(_)
        ));

        assert!(h.state.orders.list_for_user(user_id.clone()).await.unwrap().is_empty());

        // No compensation: the reservation made before the payment attempt
        // stays applied, and the cart is untouched.
        let product = h.state.products.get_product(product_id).await.unwrap().unwrap();
        assert_eq!(product.stock, 4);
        assert_eq!(h.state.cart.list_for_user(user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_admin_status_and_customer_return() {
        let h = harness();
        let user_id = seed_user(&h.state, "alice@example.com").await;
        let product_id = seed_product(&h.state, 9_900, 5).await;
        h.state
            .cart
            .add_item(user_id.clone(), product_id, String::new(), 1)
            .await
            .unwrap();
        let order = h
            .state
            .orders
            .checkout(user_id.clone(), "1 Rue de la Paix".to_string(), None)
            .await
            .unwrap();

        // Return before completion is rejected
        let err = h
            .state
            .orders
            .initiate_return(order.id.clone(), user_id.clone())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::order_actor::OrderError::ValidationError(_)
        ));

        // Admin completes, then the customer can return
        let order = h
            .state
            .orders
            .set_status(order.id, OrderStatus::Completed)
            .await
            .unwrap();
        let order = h
            .state
            .orders
            .initiate_return(order.id, user_id)
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::ReturnInitiated);
    }

    #[tokio::test]
    async fn test_favorite_duplicate_rejected_and_owner_scoped_removal() {
        let h = harness();
        let alice = seed_user(&h.state, "alice@example.com").await;
        let mallory = seed_user(&h.state, "mallory@example.com").await;
        let product_id = seed_product(&h.state, 9_900, 5).await;

        let fav = h
            .state
            .favorites
            .add(alice.clone(), product_id.clone())
            .await
            .unwrap();

        let err = h
            .state
            .favorites
            .add(alice.clone(), product_id)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::favorite_actor::FavoriteError::AlreadyExists(_)
        ));

        // Someone else's favorite reads as absent
        let err = h
            .state
            .favorites
            .remove(fav.id.clone(), mallory)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::favorite_actor::FavoriteError::NotFound(_)
        ));

        h.state.favorites.remove(fav.id, alice.clone()).await.unwrap();
        assert!(h.state.favorites.list_for_user(alice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_comment_rating_out_of_range_rejected() {
        let h = harness();
        let user_id = seed_user(&h.state, "alice@example.com").await;
        let product_id = seed_product(&h.state, 9_900, 5).await;

        let err = h
            .state
            .comments
            .add(crate::domain::CommentCreate {
                product_id: product_id.clone(),
                user_id: user_id.clone(),
                author_name: "Alice".to_string(),
                body: "Lovely".to_string(),
                rating: 6,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::comment_actor::CommentError::ValidationError(_)
        ));

        let comment = h
            .state
            .comments
            .add(crate::domain::CommentCreate {
                product_id: product_id.clone(),
                user_id,
                author_name: "Alice".to_string(),
                body: "Lovely".to_string(),
                rating: 5,
            })
            .await
            .unwrap();
        assert_eq!(comment.rating, 5);

        let comments = h.state.comments.list_for_product(product_id).await.unwrap();
        assert_eq!(comments.len(), 1);
    }

    #[tokio::test]
    async fn test_order_is_invisible_to_other_users() {
        let h = harness();
        let alice = seed_user(&h.state, "alice@example.com").await;
        let mallory = seed_user(&h.state, "mallory@example.com").await;
        let product_id = seed_product(&h.state, 9_900, 5).await;
        h.state
            .cart
            .add_item(alice.clone(), product_id, String::new(), 1)
            .await
            .unwrap();
        let order = h
            .state
            .orders
            .checkout(alice, "1 Rue de la Paix".to_string(), None)
            .await
            .unwrap();

        let seen = h
            .state
            .orders
            .get_order_for_user(order.id, mallory)
            .await
            .unwrap();
        assert!(seen.is_none());
    }

    // =========================================================================
    // HTTP surface
    // =========================================================================

    mod http_surface {
        use super::*;
        use axum::body::Body;
        use axum::http::{header, Request, StatusCode};
        use axum::Router;
        use http_body_util::BodyExt;
        use serde_json::{json, Value};
        use tower::ServiceExt;

        async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
            let response = app.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, body)
        }

        fn get(uri: &str, token: Option<&str>) -> Request<Body> {
            let mut builder = Request::builder().method("GET").uri(uri);
            if let Some(token) = token {
                builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
            }
            builder.body(Body::empty()).unwrap()
        }

        fn send_json(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
            let mut builder = Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json");
            if let Some(token) = token {
                builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
            }
            builder.body(Body::from(body.to_string())).unwrap()
        }

        /// Registers via HTTP and returns (user_id, bearer token).
        async fn register_and_login(app: &Router, email: &str) -> (String, String) {
            let (status, user) = send(
                app,
                send_json(
                    "POST",
                    "/api/auth/register",
                    None,
                    &json!({"email": email, "password": "correct horse", "name": "Alice"}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);

            let (status, body) = send(
                app,
                send_json(
                    "POST",
                    "/api/auth/login",
                    None,
                    &json!({"email": email, "password": "correct horse"}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            (
                user["id"].as_str().unwrap().to_string(),
                body["token"].as_str().unwrap().to_string(),
            )
        }

        /// Mints an admin token directly; there is no admin signup route.
        async fn admin_token(h: &TestHarness) -> String {
            let id = h
                .state
                .users
                .create_user(UserCreate {
                    email: "admin@example.com".to_string(),
                    password_hash: "x".to_string(),
                    name: "Admin".to_string(),
                    role: Role::Admin,
                })
                .await
                .unwrap();
            h.state
                .jwt
                .issue(&id, Role::Admin, "admin_session", Duration::hours(1))
                .unwrap()
        }

        #[tokio::test]
        async fn test_catalog_is_public_and_cart_is_not() {
            let h = harness();
            let app = router(h.state.clone());

            let (status, body) = send(&app, get("/api/products", None)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!([]));

            let (status, body) = send(&app, get("/api/cart", None)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert!(body["error"].is_string());
        }

        #[tokio::test]
        async fn test_login_with_wrong_password_is_400() {
            let h = harness();
            let app = router(h.state.clone());
            register_and_login(&app, "alice@example.com").await;

            let (status, body) = send(
                &app,
                send_json(
                    "POST",
                    "/api/auth/login",
                    None,
                    &json!({"email": "alice@example.com", "password": "wrong"}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Invalid credentials");
        }

        #[tokio::test]
        async fn test_register_duplicate_email_is_409() {
            let h = harness();
            let app = router(h.state.clone());
            register_and_login(&app, "alice@example.com").await;

            let (status, _) = send(
                &app,
                send_json(
                    "POST",
                    "/api/auth/register",
                    None,
                    &json!({"email": "alice@example.com", "password": "correct horse", "name": "B"}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CONFLICT);
        }

        #[tokio::test]
        async fn test_admin_routes_need_admin_role() {
            let h = harness();
            let app = router(h.state.clone());
            let (_, token) = register_and_login(&app, "alice@example.com").await;

            let (status, _) = send(&app, get("/api/admin/orders", Some(&token))).await;
            assert_eq!(status, StatusCode::FORBIDDEN);

            let (status, _) = send(&app, get("/api/admin/orders", None)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);

            let admin = admin_token(&h).await;
            let (status, body) = send(&app, get("/api/admin/orders", Some(&admin))).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!([]));
        }

        #[tokio::test]
        async fn test_profile_and_session_lifecycle() {
            let h = harness();
            let app = router(h.state.clone());
            let (user_id, token) = register_and_login(&app, "alice@example.com").await;

            // The profile lists the session opened at login
            let (status, body) = send(&app, get("/api/users/me", Some(&token))).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["user"]["id"], user_id.as_str());
            assert_eq!(body["user"]["email"], "alice@example.com");
            assert_eq!(body["sessions"].as_array().unwrap().len(), 1);

            // Plain profile edit
            let (status, body) = send(
                &app,
                send_json("PUT", "/api/users/me", Some(&token), &json!({"name": "Alicia"})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["name"], "Alicia");

            // A too-short replacement password is rejected
            let (status, _) = send(
                &app,
                send_json("PUT", "/api/users/me", Some(&token), &json!({"password": "short"})),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);

            // Taking another account's email is a conflict
            register_and_login(&app, "bob@example.com").await;
            let (status, _) = send(
                &app,
                send_json(
                    "PUT",
                    "/api/users/me",
                    Some(&token),
                    &json!({"email": "bob@example.com"}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CONFLICT);

            // Logout closes the session and the profile reflects it
            let (status, _) = send(
                &app,
                send_json("POST", "/api/auth/logout", Some(&token), &json!({})),
            )
            .await;
            assert_eq!(status, StatusCode::NO_CONTENT);
            let (_, body) = send(&app, get("/api/users/me", Some(&token))).await;
            assert_eq!(body["sessions"], json!([]));

            // Logging out again stays a no-op
            let (status, _) = send(
                &app,
                send_json("POST", "/api/auth/logout", Some(&token), &json!({})),
            )
            .await;
            assert_eq!(status, StatusCode::NO_CONTENT);
        }

        #[tokio::test]
        async fn test_admin_product_update_distinguishes_null_image_from_absent() {
            let h = harness();
            let app = router(h.state.clone());
            let admin = admin_token(&h).await;

            let (_, product) = send(
                &app,
                send_json(
                    "POST",
                    "/api/admin/products",
                    Some(&admin),
                    &json!({
                        "name": "Silver cuff",
                        "category": "bracelets",
                        "price_cents": 15900,
                        "stock": 2,
                        "image_url": "https://cdn.atelier.example/cuff.jpg"
                    }),
                ),
            )
            .await;
            let id = product["id"].as_str().unwrap().to_string();

            // Omitting the key leaves the image alone
            let (status, body) = send(
                &app,
                send_json(
                    "PUT",
                    &format!("/api/admin/products/{}", id),
                    Some(&admin),
                    &json!({"price_cents": 14900}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["image_url"], "https://cdn.atelier.example/cuff.jpg");

            // An explicit null clears it
            let (status, body) = send(
                &app,
                send_json(
                    "PUT",
                    &format!("/api/admin/products/{}", id),
                    Some(&admin),
                    &json!({"image_url": null}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["image_url"], json!(null));
        }

        #[tokio::test]
        async fn test_delete_missing_cart_row_is_404() {
            let h = harness();
            let app = router(h.state.clone());
            let (_, token) = register_and_login(&app, "alice@example.com").await;

            let request = Request::builder()
                .method("DELETE")
                .uri("/api/cart/ghost")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap();
            let (status, _) = send(&app, request).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }

        #[tokio::test]
        async fn test_parcel_shop_lookup() {
            let h = harness();
            let app = router(h.state.clone());

            let (status, body) = send(
                &app,
                get(
                    "/api/delivery/parcel-shops?address=1%20Rue%20de%20la%20Paix,%20Paris",
                    None,
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body[0]["id"], "shop_1");

            let (status, _) = send(
                &app,
                get("/api/delivery/parcel-shops?address=nowhere", None),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }

        #[tokio::test]
        async fn test_recycle_marketplace_visibility() {
            let h = harness();
            let app = router(h.state.clone());
            let (_, token) = register_and_login(&app, "seller@example.com").await;

            let (status, listing) = send(
                &app,
                send_json(
                    "POST",
                    "/api/recycle",
                    Some(&token),
                    &json!({"title": "Vintage brooch", "price_cents": 4500, "material": "silver"}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            let listing_id = listing["id"].as_str().unwrap().to_string();

            // Private by default: invisible in the open marketplace
            let (_, body) = send(&app, get("/api/recycle", None)).await;
            assert_eq!(body, json!([]));
            let (_, mine) = send(&app, get("/api/recycle/mine", Some(&token))).await;
            assert_eq!(mine.as_array().unwrap().len(), 1);

            // Publish it
            let (status, _) = send(
                &app,
                send_json(
                    "PUT",
                    &format!("/api/recycle/{}", listing_id),
                    Some(&token),
                    &json!({"public": true}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);

            let (_, body) = send(&app, get("/api/recycle", None)).await;
            assert_eq!(body.as_array().unwrap().len(), 1);

            // Another user cannot touch it
            let (_, other_token) = register_and_login(&app, "other@example.com").await;
            let (status, _) = send(
                &app,
                send_json(
                    "PUT",
                    &format!("/api/recycle/{}", listing_id),
                    Some(&other_token),
                    &json!({"public": false}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }

        #[tokio::test]
        async fn test_storefront_journey_over_http() {
            let h = harness();
            let app = router(h.state.clone());
            let admin = admin_token(&h).await;

            // Admin stocks the catalog
            let (status, product) = send(
                &app,
                send_json(
                    "POST",
                    "/api/admin/products",
                    Some(&admin),
                    &json!({
                        "name": "Gold signet ring",
                        "category": "rings",
                        "price_cents": 25900,
                        "sizes": ["52", "54"],
                        "stock": 4
                    }),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            let product_id = product["id"].as_str().unwrap().to_string();

            // Customer shops
            let (_, token) = register_and_login(&app, "alice@example.com").await;
            let (status, _) = send(
                &app,
                send_json(
                    "POST",
                    "/api/cart",
                    Some(&token),
                    &json!({"product_id": product_id, "size": "52", "quantity": 2}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);

            let (status, order) = send(
                &app,
                send_json(
                    "POST",
                    "/api/orders",
                    Some(&token),
                    &json!({"shipping_address": "1 Rue de la Paix, Paris"}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            assert_eq!(order["total_cents"], 51_800);
            assert_eq!(order["status"], "Pending");
            let order_id = order["id"].as_str().unwrap().to_string();

            // Admin progresses the order with the wire status strings
            let (status, body) = send(
                &app,
                send_json(
                    "PUT",
                    &format!("/api/admin/orders/{}/status", order_id),
                    Some(&admin),
                    &json!({"status": "Completed"}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["status"], "Completed");

            // Unknown status string is rejected
            let (status, _) = send(
                &app,
                send_json(
                    "PUT",
                    &format!("/api/admin/orders/{}/status", order_id),
                    Some(&admin),
                    &json!({"status": "Shipped"}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);

            // Customer initiates a return on the completed order
            let (status, body) = send(
                &app,
                send_json(
                    "POST",
                    &format!("/api/orders/{}/return", order_id),
                    Some(&token),
                    &json!({}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["status"], "Return Initiated");

            assert_eq!(*h.payment.created.lock().unwrap(), vec![51_800]);
        }
    }
}
