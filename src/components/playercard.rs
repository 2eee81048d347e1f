/// Image path of an inventory playercard.
pub fn playercard_src(file: &str) -> String {
    format!("/playercards/{}.png", file)
}
