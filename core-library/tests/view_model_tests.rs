//! Integration tests for the catalogue view-model
//!
//! These tests run the library and dashboard computations over the demo
//! catalogue and verify:
//! - Search, filter and sort results for the library view
//! - Dashboard statistics and the genre distribution
//! - Decoding of backend records with absent optional fields

use core_library::format::format_byte_size;
use core_library::models::{Movie, Quality};
use core_library::query::{
    available_formats, available_genres, filter_and_sort, CategoryFilter, SortKey, ViewParameters,
};
use core_library::stats::compute_stats;
use core_library::demo_movies;

fn titles(movies: &[&Movie]) -> Vec<String> {
    movies.iter().map(|m| m.title.clone()).collect()
}

fn all_sort_keys() -> [SortKey; 5] {
    [
        SortKey::Title,
        SortKey::Year,
        SortKey::DateAdded,
        SortKey::Rating,
        SortKey::WatchCount,
    ]
}

#[test]
fn test_demo_sizes_format() {
    let movies = demo_movies();
    assert_eq!(format_byte_size(movies[0].file_size_bytes), "4 GB");
    assert_eq!(format_byte_size(movies[4].file_size_bytes), "1.5 GB");
    assert_eq!(format_byte_size(movies[7].file_size_bytes), "2.5 GB");
}

#[test]
fn test_search_by_director() {
    let movies = demo_movies();
    let params = ViewParameters::default().with_search("nolan");

    let result = filter_and_sort(&movies, &params);
    assert_eq!(
        titles(&result),
        vec!["Inception", "Interstellar", "The Dark Knight"]
    );
}

#[test]
fn test_default_view_sorts_by_title() {
    let movies = demo_movies();
    let result = filter_and_sort(&movies, &ViewParameters::default());

    assert_eq!(
        titles(&result),
        vec![
            "Avatar",
            "Forrest Gump",
            "Inception",
            "Interstellar",
            "Pulp Fiction",
            "The Dark Knight",
            "The Godfather",
            "The Matrix",
        ]
    );
}

#[test]
fn test_sort_by_watch_count() {
    let movies = demo_movies();
    let params = ViewParameters::default().with_sort(SortKey::WatchCount);

    let result = filter_and_sort(&movies, &params);
    assert_eq!(result.first().map(|m| m.title.as_str()), Some("The Dark Knight"));
    assert_eq!(result.last().map(|m| m.title.as_str()), Some("Pulp Fiction"));
    assert!(result
        .windows(2)
        .all(|pair| pair[0].watch_count >= pair[1].watch_count));
}

#[test]
fn test_sort_by_rating_keeps_snapshot_order_for_ties() {
    let movies = demo_movies();
    let params = ViewParameters::default().with_sort(SortKey::Rating);

    let result = filter_and_sort(&movies, &params);
    assert_eq!(
        titles(&result),
        vec![
            "The Godfather",
            "The Dark Knight",
            "Pulp Fiction",
            "Inception",
            "Forrest Gump",
            "The Matrix",
            "Interstellar",
            "Avatar",
        ]
    );
}

#[test]
fn test_genre_and_format_filters_combine() {
    let movies = demo_movies();
    let params = ViewParameters::default()
        .with_genre(CategoryFilter::parse("Crime"))
        .with_format(CategoryFilter::parse("avi"));

    let result = filter_and_sort(&movies, &params);
    assert_eq!(titles(&result), vec!["The Dark Knight", "The Godfather"]);

    let no_match = ViewParameters::default()
        .with_search("zzz")
        .with_genre(CategoryFilter::parse("all"));
    assert!(filter_and_sort(&movies, &no_match).is_empty());
}

#[test]
fn test_default_params_yield_a_permutation() {
    let movies = demo_movies();

    for key in all_sort_keys() {
        let result = filter_and_sort(&movies, &ViewParameters::default().with_sort(key));
        assert_eq!(result.len(), movies.len());

        let mut got: Vec<&str> = result.iter().map(|m| m.id.as_str()).collect();
        let mut expected: Vec<&str> = movies.iter().map(|m| m.id.as_str()).collect();
        got.sort_unstable();
        expected.sort_unstable();
        assert_eq!(got, expected, "sort key {key}");
    }
}

#[test]
fn test_repeated_calls_agree_and_leave_snapshot_untouched() {
    let movies = demo_movies();

    for key in all_sort_keys() {
        let params = ViewParameters::default()
            .with_search("the")
            .with_genre(CategoryFilter::parse("Drama"))
            .with_sort(key);

        let first = filter_and_sort(&movies, &params);
        let second = filter_and_sort(&movies, &params);
        assert_eq!(first, second, "sort key {key}");
    }

    assert_eq!(movies, demo_movies());
}

#[test]
fn test_filtering_its_own_output_changes_nothing() {
    let movies = demo_movies();
    let params = ViewParameters::default()
        .with_search("a")
        .with_sort(SortKey::DateAdded);

    let first: Vec<Movie> = filter_and_sort(&movies, &params)
        .into_iter()
        .cloned()
        .collect();
    let second = filter_and_sort(&first, &params);

    assert_eq!(
        titles(&second),
        first.iter().map(|m| m.title.clone()).collect::<Vec<_>>()
    );
}

#[test]
fn test_dashboard_totals() {
    let movies = demo_movies();
    let stats = compute_stats(&movies);

    assert_eq!(stats.total_count, 8);
    assert_eq!(stats.total_size_bytes, 26_843_545_600);
    assert_eq!(format_byte_size(stats.total_size_bytes), "25 GB");

    assert_eq!(stats.format_counts.get("mkv"), Some(&3));
    assert_eq!(stats.format_counts.get("mp4"), Some(&3));
    assert_eq!(stats.format_counts.get("avi"), Some(&2));

    assert_eq!(stats.quality_counts.get(&Quality::Uhd4k), Some(&3));
    assert_eq!(stats.quality_counts.get(&Quality::Hd), Some(&4));
    assert_eq!(stats.quality_counts.get(&Quality::Sd), Some(&1));
}

#[test]
fn test_genre_pairs_sum_to_tag_count() {
    let movies = demo_movies();
    let stats = compute_stats(&movies);

    let pairs: usize = movies.iter().map(|m| m.genres.len()).sum();
    assert_eq!(pairs, 21);
    assert_eq!(stats.genre_tag_count(), pairs);
}

#[test]
fn test_genre_distribution_order() {
    let stats = compute_stats(&demo_movies());
    let shares = stats.genre_distribution(8);

    let genres: Vec<&str> = shares.iter().map(|s| s.genre.as_str()).collect();
    assert_eq!(
        genres,
        vec![
            "Drama",
            "Action",
            "Crime",
            "Sci-Fi",
            "Adventure",
            "Thriller",
            "Fantasy",
            "Romance",
        ]
    );
    assert!((shares[0].percent - 62.5).abs() < 1e-9);
    assert!((shares[1].percent - 50.0).abs() < 1e-9);

    assert_eq!(stats.genre_distribution(3).len(), 3);
}

#[test]
fn test_recently_added() {
    let stats = compute_stats(&demo_movies());
    let titles: Vec<&str> = stats
        .recently_added
        .iter()
        .map(|m| m.title.as_str())
        .collect();

    assert_eq!(
        titles,
        vec![
            "The Matrix",
            "Inception",
            "Interstellar",
            "The Dark Knight",
            "Pulp Fiction",
        ]
    );
}

#[test]
fn test_most_watched_excludes_unwatched() {
    let stats = compute_stats(&demo_movies());
    let ranked: Vec<(&str, u32)> = stats
        .most_watched
        .iter()
        .map(|m| (m.title.as_str(), m.watch_count))
        .collect();

    assert_eq!(
        ranked,
        vec![
            ("The Dark Knight", 5),
            ("Forrest Gump", 4),
            ("The Matrix", 3),
            ("Inception", 2),
            ("The Godfather", 2),
        ]
    );
    assert!(stats.most_watched.iter().all(|m| m.title != "Pulp Fiction"));
}

#[test]
fn test_available_options_from_demo() {
    let movies = demo_movies();

    assert_eq!(
        available_genres(&movies),
        vec![
            "Action",
            "Adventure",
            "Crime",
            "Drama",
            "Fantasy",
            "Romance",
            "Sci-Fi",
            "Thriller",
        ]
    );
    assert_eq!(available_formats(&movies), vec!["avi", "mkv", "mp4"]);
}

#[test]
fn test_empty_snapshot_boundary() {
    let empty: Vec<Movie> = Vec::new();

    for key in all_sort_keys() {
        let params = ViewParameters::default().with_sort(key).with_search("x");
        assert!(filter_and_sort(&empty, &params).is_empty());
    }

    let stats = compute_stats(&empty);
    assert_eq!(stats.total_count, 0);
    assert_eq!(stats.total_size_bytes, 0);
    assert!(stats.recently_added.is_empty());
    assert!(stats.most_watched.is_empty());
    assert!(stats.genre_distribution(8).is_empty());
    assert!(available_genres(&empty).is_empty());
}

#[test]
fn test_wire_record_with_absent_fields() {
    let json = r#"{
        "id": "rec-1",
        "title": "Untagged Home Movie",
        "genre": null,
        "filePath": "/Videos/home.mov",
        "fileName": "home.mov",
        "fileSize": 1024,
        "format": "mov",
        "dateAdded": "2024-02-01T08:00:00Z",
        "userId": "someone"
    }"#;

    let movie: Movie = serde_json::from_str(json).unwrap();
    assert!(movie.genres.is_empty());
    assert!(movie.cast.is_empty());
    assert_eq!(movie.watch_count, 0);
    assert_eq!(movie.year, None);
    assert_eq!(movie.rating, None);
    assert_eq!(movie.quality, None);
    assert_eq!(movie.owner_id, "someone");

    let snapshot = vec![movie];
    for key in all_sort_keys() {
        let params = ViewParameters::default().with_sort(key);
        assert_eq!(filter_and_sort(&snapshot, &params).len(), 1);
    }
    let stats = compute_stats(&snapshot);
    assert!(stats.genre_counts.is_empty());
    assert!(stats.most_watched.is_empty());
}

#[test]
fn test_wire_record_round_trips_renamed_keys() {
    let movie = demo_movies().remove(0);
    let value = serde_json::to_value(&movie).unwrap();

    assert_eq!(value["genre"][0], "Action");
    assert_eq!(value["duration"], 136);
    assert_eq!(value["fileSize"], 4_294_967_296u64);
    assert_eq!(value["quality"], "4K");
    assert_eq!(value["userId"], "demo-user");
    assert!(value.get("ownerId").is_none());

    let decoded: Movie = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, movie);
}
