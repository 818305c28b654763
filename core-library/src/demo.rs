//! Built-in demo catalogue used when the app runs without a backend.

use crate::models::{Movie, Quality};

/// Owner of every demo record.
pub const DEMO_OWNER: &str = "demo-user";

const POSTER_BASE: &str = "https://images.unsplash.com/photo-";
const POSTER_PARAMS: &str = "?w=400&h=600&fit=crop";

struct DemoEntry {
    id: &'static str,
    title: &'static str,
    year: i32,
    genres: &'static [&'static str],
    director: &'static str,
    duration: u32,
    rating: f64,
    poster: &'static str,
    ext: &'static str,
    size: u64,
    date_added: &'static str,
    last_watched: Option<&'static str>,
    watch_count: u32,
    description: &'static str,
    cast: &'static [&'static str],
    quality: Quality,
}

const DEMO_ENTRIES: [DemoEntry; 8] = [
    DemoEntry {
        id: "demo-1",
        title: "The Matrix",
        year: 1999,
        genres: &["Action", "Sci-Fi", "Thriller"],
        director: "The Wachowskis",
        duration: 136,
        rating: 8.7,
        poster: "1489599735734-79b4ba0602f8",
        ext: "mkv",
        size: 4_294_967_296,
        date_added: "2024-01-15T10:30:00Z",
        last_watched: Some("2024-01-20T19:45:00Z"),
        watch_count: 3,
        description: "A computer programmer is led to fight an underground war against powerful computers who have constructed his entire reality with a system called the Matrix.",
        cast: &["Keanu Reeves", "Laurence Fishburne", "Carrie-Anne Moss"],
        quality: Quality::Uhd4k,
    },
    DemoEntry {
        id: "demo-2",
        title: "Inception",
        year: 2010,
        genres: &["Action", "Sci-Fi", "Thriller"],
        director: "Christopher Nolan",
        duration: 148,
        rating: 8.8,
        poster: "1440404653325-ab127d49abc1",
        ext: "mp4",
        size: 3_221_225_472,
        date_added: "2024-01-10T14:20:00Z",
        last_watched: Some("2024-01-18T21:15:00Z"),
        watch_count: 2,
        description: "A thief who steals corporate secrets through dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
        cast: &["Leonardo DiCaprio", "Marion Cotillard", "Tom Hardy"],
        quality: Quality::Hd,
    },
    DemoEntry {
        id: "demo-3",
        title: "Interstellar",
        year: 2014,
        genres: &["Adventure", "Drama", "Sci-Fi"],
        director: "Christopher Nolan",
        duration: 169,
        rating: 8.6,
        poster: "1446776653964-20c1d3a81b06",
        ext: "mkv",
        size: 5_368_709_120,
        date_added: "2024-01-08T16:45:00Z",
        last_watched: Some("2024-01-22T20:30:00Z"),
        watch_count: 1,
        description: "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
        cast: &["Matthew McConaughey", "Anne Hathaway", "Jessica Chastain"],
        quality: Quality::Uhd4k,
    },
    DemoEntry {
        id: "demo-4",
        title: "The Dark Knight",
        year: 2008,
        genres: &["Action", "Crime", "Drama"],
        director: "Christopher Nolan",
        duration: 152,
        rating: 9.0,
        poster: "1578662996442-48f60103fc96",
        ext: "avi",
        size: 2_147_483_648,
        date_added: "2024-01-05T12:15:00Z",
        last_watched: Some("2024-01-25T18:00:00Z"),
        watch_count: 5,
        description: "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests.",
        cast: &["Christian Bale", "Heath Ledger", "Aaron Eckhart"],
        quality: Quality::Hd,
    },
    DemoEntry {
        id: "demo-5",
        title: "Pulp Fiction",
        year: 1994,
        genres: &["Crime", "Drama"],
        director: "Quentin Tarantino",
        duration: 154,
        rating: 8.9,
        poster: "1489599735734-79b4ba0602f8",
        ext: "mp4",
        size: 1_610_612_736,
        date_added: "2024-01-03T09:30:00Z",
        last_watched: None,
        watch_count: 0,
        description: "The lives of two mob hitmen, a boxer, a gangster and his wife intertwine in four tales of violence and redemption.",
        cast: &["John Travolta", "Uma Thurman", "Samuel L. Jackson"],
        quality: Quality::Hd,
    },
    DemoEntry {
        id: "demo-6",
        title: "Avatar",
        year: 2009,
        genres: &["Action", "Adventure", "Fantasy"],
        director: "James Cameron",
        duration: 162,
        rating: 7.8,
        poster: "1518709268805-4e9042af2176",
        ext: "mkv",
        size: 6_442_450_944,
        date_added: "2024-01-01T15:00:00Z",
        last_watched: Some("2024-01-12T17:30:00Z"),
        watch_count: 1,
        description: "A paraplegic Marine dispatched to the moon Pandora on a unique mission becomes torn between following his orders and protecting the world he feels is his home.",
        cast: &["Sam Worthington", "Zoe Saldana", "Sigourney Weaver"],
        quality: Quality::Uhd4k,
    },
    DemoEntry {
        id: "demo-7",
        title: "The Godfather",
        year: 1972,
        genres: &["Crime", "Drama"],
        director: "Francis Ford Coppola",
        duration: 175,
        rating: 9.2,
        poster: "1489599735734-79b4ba0602f8",
        ext: "avi",
        size: 1_073_741_824,
        date_added: "2023-12-28T11:45:00Z",
        last_watched: Some("2024-01-14T20:00:00Z"),
        watch_count: 2,
        description: "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
        cast: &["Marlon Brando", "Al Pacino", "James Caan"],
        quality: Quality::Sd,
    },
    DemoEntry {
        id: "demo-8",
        title: "Forrest Gump",
        year: 1994,
        genres: &["Drama", "Romance"],
        director: "Robert Zemeckis",
        duration: 142,
        rating: 8.8,
        poster: "1489599735734-79b4ba0602f8",
        ext: "mp4",
        size: 2_684_354_560,
        date_added: "2023-12-25T13:20:00Z",
        last_watched: Some("2024-01-16T19:15:00Z"),
        watch_count: 4,
        description: "The presidencies of Kennedy and Johnson, the events of Vietnam, Watergate and other historical events unfold from the perspective of an Alabama man.",
        cast: &["Tom Hanks", "Robin Wright", "Gary Sinise"],
        quality: Quality::Hd,
    },
];

impl DemoEntry {
    fn to_movie(&self) -> Movie {
        let file_name = format!("{}.{}", self.title, self.ext);
        Movie {
            id: self.id.to_string(),
            title: self.title.to_string(),
            year: Some(self.year),
            genres: to_strings(self.genres),
            director: Some(self.director.to_string()),
            duration_minutes: Some(self.duration),
            rating: Some(self.rating),
            poster_url: Some(format!("{POSTER_BASE}{}{POSTER_PARAMS}", self.poster)),
            file_path: format!("/Movies/{} ({})/{}", self.title, self.year, file_name),
            file_name,
            file_size_bytes: self.size,
            format: self.ext.to_string(),
            date_added: self.date_added.to_string(),
            last_watched: self.last_watched.map(str::to_string),
            watch_count: self.watch_count,
            description: Some(self.description.to_string()),
            cast: to_strings(self.cast),
            quality: Some(self.quality),
            owner_id: DEMO_OWNER.to_string(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The eight-film demo catalogue, in its canonical order.
///
/// Returns a fresh copy on every call.
pub fn demo_movies() -> Vec<Movie> {
    DEMO_ENTRIES.iter().map(DemoEntry::to_movie).collect()
}
