//! Game catalog shown on the games page. Image URLs point at licensed stock
//! photography; the playable games live in the app, not on this site.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Game {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub skills: &'static [&'static str],
    pub image_url: &'static str,
}

pub const GAMES: &[Game] = &[
    Game {
        id: "1",
        title: "Number Ninja",
        description: "Master counting and number recognition in this fast-paced adventure.",
        category: "Math",
        skills: &["Counting", "Number Recognition", "Addition"],
        image_url: "https://images.pexels.com/photos/3662667/pexels-photo-3662667.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Game {
        id: "2",
        title: "Letter Quest",
        description: "Journey through an alphabet wonderland to learn letters and phonics.",
        category: "Language",
        skills: &["Letter Recognition", "Phonics", "Vocabulary"],
        image_url: "https://images.pexels.com/photos/301926/pexels-photo-301926.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Game {
        id: "3",
        title: "Shape Sorter",
        description: "Identify and match shapes in this colorful puzzle adventure.",
        category: "Logic",
        skills: &["Shape Recognition", "Matching", "Spatial Awareness"],
        image_url: "https://images.pexels.com/photos/1148998/pexels-photo-1148998.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Game {
        id: "4",
        title: "Color Splash",
        description: "Explore the rainbow with painting activities and color matching challenges.",
        category: "Creativity",
        skills: &["Color Recognition", "Creativity", "Fine Motor Skills"],
        image_url: "https://images.pexels.com/photos/1070345/pexels-photo-1070345.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Game {
        id: "5",
        title: "Animal Explorer",
        description: "Learn about animals and their habitats in this interactive adventure.",
        category: "Science",
        skills: &["Biology", "Memory", "Classification"],
        image_url: "https://images.pexels.com/photos/3608263/pexels-photo-3608263.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Game {
        id: "6",
        title: "Puzzle Palace",
        description: "Solve increasingly challenging puzzles to boost logical thinking.",
        category: "Logic",
        skills: &["Problem Solving", "Critical Thinking", "Patience"],
        image_url: "https://images.pexels.com/photos/2608404/pexels-photo-2608404.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Game {
        id: "7",
        title: "Word Builder",
        description: "Construct simple words with this engaging letter-based game.",
        category: "Language",
        skills: &["Spelling", "Reading", "Vocabulary"],
        image_url: "https://images.pexels.com/photos/6633912/pexels-photo-6633912.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    Game {
        id: "8",
        title: "Math Monsters",
        description: "Defeat friendly monsters by solving addition and subtraction problems.",
        category: "Math",
        skills: &["Addition", "Subtraction", "Number Sense"],
        image_url: "https://images.pexels.com/photos/5428824/pexels-photo-5428824.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
];

/// Distinct categories in first-seen order, used for the games page filter.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for game in GAMES {
        if !seen.contains(&game.category) {
            seen.push(game.category);
        }
    }
    seen
}

/// Games in a category, or the whole catalog when `category` is `None`.
pub fn games_in(category: Option<&str>) -> Vec<&'static Game> {
    GAMES
        .iter()
        .filter(|game| category.map_or(true, |wanted| game.category == wanted))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_distinct_and_ordered() {
        assert_eq!(
            categories(),
            vec!["Math", "Language", "Logic", "Creativity", "Science"]
        );
    }

    #[test]
    fn category_filter_narrows_the_catalog() {
        assert_eq!(games_in(None).len(), GAMES.len());
        let math: Vec<_> = games_in(Some("Math"));
        assert_eq!(math.len(), 2);
        assert!(math.iter().all(|game| game.category == "Math"));
        assert!(games_in(Some("Geography")).is_empty());
    }
}
