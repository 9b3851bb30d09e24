#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountType {
    pub id: String,
    pub name: String,
}
