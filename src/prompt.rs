//! Interactive prompts for values omitted on the command line

use crate::catalog::Choice;
use crate::error::{BuildError, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

/// Line-oriented prompter over any async reader/writer pair.
///
/// End of input is treated as the user walking away: [`BuildError::UserCancelled`].
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Ask until the answer is one of `T`'s names.
    pub async fn choose<T: Choice>(&mut self, label: &str) -> Result<T> {
        let names = T::names();
        loop {
            let answer = self
                .ask(&format!("{} ({}): ", label, names.join("|")))
                .await?;
            match T::parse(&answer) {
                Ok(choice) => return Ok(choice),
                Err(_) => {
                    self.say(&format!(
                        "Invalid choice. Please select from: {}\n",
                        names.join(", ")
                    ))
                    .await?
                }
            }
        }
    }

    /// Ask for free text; blank answers are asked again.
    pub async fn text(&mut self, label: &str, hint: &str) -> Result<String> {
        loop {
            let answer = self.ask(&format!("{} ({}): ", label, hint)).await?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    async fn ask(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt).await?;
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(BuildError::UserCancelled);
        }
        Ok(line.trim().to_string())
    }

    async fn say(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}
