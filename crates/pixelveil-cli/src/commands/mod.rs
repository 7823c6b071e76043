pub mod hide;
pub mod unveil;

use crate::CliResult;

/// takes the password from the command line or prompts for it
pub(crate) fn read_password(given: Option<String>, confirm: bool) -> CliResult<String> {
    let Some(password) = given else {
        let mut prompt = dialoguer::Password::new()
            .with_prompt("Password")
            .allow_empty_password(true);
        if confirm {
            prompt = prompt.with_confirmation("Repeat password", "Passwords do not match");
        }

        return prompt.interact().map_err(|e| {
            pixelveil_core::PixelveilError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                e,
            ))
        });
    };

    Ok(password)
}
