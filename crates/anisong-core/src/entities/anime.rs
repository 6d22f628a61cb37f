use serde::{Deserialize, Serialize};

/// An anime, keyed by its Anime News Network id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Anime {
    pub ann_id: i64,
    /// Display name as listed in the AMQ expand library.
    pub expand_name: String,
    pub jp_name: Option<String>,
    pub en_name: Option<String>,
    pub alt_names: Vec<String>,
    pub anime_type: Option<String>,
    pub season: Option<String>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
}

impl Anime {
    /// Every name in display preference order: expand, Japanese, English, alternates.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.expand_name.as_str())
            .chain(self.jp_name.as_deref())
            .chain(self.en_name.as_deref())
            .chain(self.alt_names.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_display_preference() {
        let anime = Anime {
            ann_id: 1,
            expand_name: "Shingeki no Kyojin".into(),
            jp_name: Some("進撃の巨人".into()),
            en_name: None,
            alt_names: vec!["AoT".into()],
            anime_type: Some("TV".into()),
            season: Some("Spring 2013".into()),
            genres: Vec::new(),
            tags: Vec::new(),
        };
        let names: Vec<&str> = anime.names().collect();
        assert_eq!(names, vec!["Shingeki no Kyojin", "進撃の巨人", "AoT"]);
    }
}
