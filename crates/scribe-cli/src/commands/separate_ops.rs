use std::path::Path;

use scribe_core::unicode;

use super::annotate_ops::read_input;

pub fn separate(text: Option<String>, file: Option<&Path>) {
    let input = read_input(text, file);
    let s = unicode::separate(&input);
    println!("characters:   {}", s.characters);
    println!("romanization: {}", s.romanization);
}
