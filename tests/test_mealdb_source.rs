use mealdb_search::{MealDbSource, RecipeSource, SearchError};
use mockito::Matcher;

fn meals_json(ids: &[u32]) -> String {
    let meals: Vec<String> = ids
        .iter()
        .map(|id| {
            format!(
                r#"{{"strMeal":"Meal {id}","strMealThumb":"https://www.themealdb.com/images/media/meals/{id}.jpg","idMeal":"{id}"}}"#
            )
        })
        .collect();
    format!(r#"{{"meals":[{}]}}"#, meals.join(","))
}

#[tokio::test]
async fn test_filter_by_ingredient_decodes_summaries() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), "chicken".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(meals_json(&[52772, 52795]))
        .expect(1)
        .create_async()
        .await;

    let source = MealDbSource::new(server.url(), None).unwrap();
    let meals = source.filter_by_ingredient("chicken").await.unwrap();

    m.assert_async().await;
    assert_eq!(meals.len(), 2);
    assert_eq!(meals[0].id, "52772");
    assert_eq!(meals[1].name, "Meal 52795");
}

#[tokio::test]
async fn test_query_parameter_is_escaped() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "mac & cheese".into()))
        .with_status(200)
        .with_body(meals_json(&[1]))
        .expect(1)
        .create_async()
        .await;

    let source = MealDbSource::new(server.url(), None).unwrap();
    let meals = source.search_by_name("mac & cheese").await.unwrap();

    m.assert_async().await;
    assert_eq!(meals.len(), 1);
}

#[tokio::test]
async fn test_null_meals_is_empty_not_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("c".into(), "Seafood".into()))
        .with_status(200)
        .with_body(r#"{"meals":null}"#)
        .create_async()
        .await;

    let source = MealDbSource::new(server.url(), None).unwrap();
    let meals = source.filter_by_category("Seafood").await.unwrap();
    assert!(meals.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_decode_failure() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let source = MealDbSource::new(server.url(), None).unwrap();
    let err = source.filter_by_ingredient("egg").await.unwrap_err();
    assert!(matches!(err, SearchError::DecodeFailure(_)));
    assert!(!err.is_network());
}

#[tokio::test]
async fn test_server_error_is_network_failure() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(502)
        .create_async()
        .await;

    let source = MealDbSource::new(server.url(), None).unwrap();
    let err = source.search_by_name("egg").await.unwrap_err();
    assert!(matches!(err, SearchError::Status { status: 502, .. }));
    assert!(err.is_network());
}

#[tokio::test]
async fn test_unreachable_host_is_network_failure() {
    // Nothing listens on port 9 (discard) on the loopback interface
    let source = MealDbSource::new("http://127.0.0.1:9", None).unwrap();
    let err = source.random().await.unwrap_err();
    assert!(matches!(err, SearchError::NetworkFailure(_)));
}

#[tokio::test]
async fn test_random_returns_first_meal() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/random.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(meals_json(&[53049]))
        .create_async()
        .await;

    let source = MealDbSource::new(server.url(), None).unwrap();
    let meal = source.random().await.unwrap().unwrap();
    assert_eq!(meal.id, "53049");
}

#[tokio::test]
async fn test_lookup_full_record() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52772".into()))
        .with_status(200)
        .with_body(include_str!("fixtures/lookup_52772.json"))
        .create_async()
        .await;

    let source = MealDbSource::new(server.url(), None).unwrap();
    let detail = source.lookup("52772").await.unwrap().unwrap();

    assert_eq!(detail.name, "Teriyaki Chicken Casserole");
    assert_eq!(detail.area.as_deref(), Some("Japanese"));
    let ingredients = detail.ingredients();
    assert_eq!(ingredients.len(), 9);
    assert_eq!(ingredients[0].ingredient, "soy sauce");
    assert_eq!(ingredients[0].measure, "3/4 cup");
    assert_eq!(detail.instruction_steps().len(), 4);
}

#[tokio::test]
async fn test_lookup_unknown_id() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals":null}"#)
        .create_async()
        .await;

    let source = MealDbSource::new(server.url(), None).unwrap();
    assert!(source.lookup("1").await.unwrap().is_none());
}
