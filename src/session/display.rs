//! Account rendering for the terminal

use crate::types::Account;

const RULE_WIDTH: usize = 60;

/// Render all seven fields of an account between separator rules
pub fn render_account(account: &Account) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    format!(
        "{rule}\n\
         Account Number : {}\n\
         Name : {}\n\
         Date of Birth : {}\n\
         Gender : {}\n\
         Email : {}\n\
         Phone Number : {}\n\
         Balance : {}\n\
         {rule}",
        account.account_no,
        account.name,
        account.dob.format("%d/%m/%Y"),
        account.gender,
        account.email,
        account.phone_no,
        account.balance,
    )
}
