//! Letter catalog: the fixed pool of letter texts per category.

use crate::types::Category;

const TOYS: [&str; 10] = [
    "Dear Santa, I would love to have a toy car set.",
    "Could you bring me a building block set this Christmas?",
    "I dream of playing with a remote-controlled helicopter.",
    "A stuffed teddy bear would make me so happy!",
    "I wish for a toy kitchen to play chef with my friends.",
    "Santa, I would love a puzzle game to solve.",
    "A magical light-up wand would make my Christmas magical.",
    "Could you send me a set of action figures?",
    "I would like a toy spaceship for my adventures.",
    "Please bring me a colorful spinning top to play with.",
];

const BOOKS: [&str; 10] = [
    "Dear Santa, I would love a book of fairy tales to read before bed.",
    "Could you bring me a mystery novel to solve thrilling puzzles?",
    "I wish for a coloring book with my favorite animals.",
    "A book of magical spells and potions would be amazing!",
    "Santa, I would love to have a comic book collection.",
    "I dream of reading about space adventures in a sci-fi book.",
    "Please bring me an encyclopedia about dinosaurs.",
    "I would love a poetry book filled with beautiful verses.",
    "A book of recipes for kids would be perfect for my kitchen.",
    "I wish for a graphic novel full of superheroes and villains.",
];

const SPORTS: [&str; 10] = [
    "Dear Santa, I dream of having a shiny new basketball.",
    "Could you bring me a pair of running shoes for my races?",
    "I wish for a cricket bat to play with my friends.",
    "Santa, I would love a yoga mat for practicing stretches.",
    "A set of golf clubs would make my holidays extra fun!",
    "Please bring me a badminton racket and shuttlecock.",
    "I dream of having protective gear for skateboarding.",
    "A set of colorful hula hoops would be so exciting!",
    "I wish for a water bottle and a sports bag for training.",
    "Could you send me a volleyball and a net for beach games?",
];

/// Letter texts a child may write for `category`.
pub fn templates(category: Category) -> &'static [&'static str] {
    match category {
        Category::Toys => &TOYS,
        Category::Books => &BOOKS,
        Category::Sports => &SPORTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_pool() {
        for c in Category::ALL {
            assert_eq!(templates(c).len(), 10, "{:?}", c);
        }
    }

    #[test]
    fn pools_do_not_share_texts() {
        for a in Category::ALL {
            for b in Category::ALL {
                if a == b {
                    continue;
                }
                for text in templates(a) {
                    assert!(!templates(b).contains(text));
                }
            }
        }
    }
}
