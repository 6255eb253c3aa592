//! Command example blocks.
//!
//! A command block starts with a line of the form `> COMMAND`. The lines that
//! follow, up to the next command line or a blank line, describe it:
//!
//! ```text
//! > ls -la
//! Lists every file in the directory,
//! including hidden ones.
//! ```
//!
//! Blocks are rewritten into raw HTML before the document reaches the
//! markdown renderer, so the emitted fragments must already be valid HTML.
//! Fenced code blocks are passed through untouched.

use html_escape::encode_text;

/// A command example found in a markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBlock {
    /// The command text, trimmed.
    pub command: String,
    /// The description that followed the command, trimmed. May be empty.
    pub description: String,
}

impl CommandBlock {
    /// Renders the block as a command `div` followed by an explanation paragraph.
    ///
    /// The page shows the command and description verbatim; characters that
    /// are significant in HTML are escaped in the markup.
    ///
    /// ## Examples
    ///
    /// ```
    /// use mdpage_lib::markdown::CommandBlock;
    ///
    /// let block = CommandBlock {
    ///     command: "ls -la".to_string(),
    ///     description: "list files".to_string(),
    /// };
    /// assert_eq!(
    ///     block.to_html(),
    ///     "<div class=\"command\">ls -la</div>\n<p class=\"explanation\">list files</p>\n"
    /// );
    /// ```
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"command\">{}</div>\n<p class=\"explanation\">{}</p>\n",
            encode_text(&self.command),
            encode_text(&self.description)
        )
    }
}

/// The result of rewriting a markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandRewrite {
    /// The body with every command block replaced by its HTML.
    pub content: String,
    /// The blocks that were replaced, in document order.
    pub blocks: Vec<CommandBlock>,
}

/// An open code fence: its marker character and run length.
#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: char,
    len: usize,
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Returns the command text when `line` is a command marker line.
fn command_text(line: &str) -> Option<&str> {
    let command = line.strip_prefix("> ")?.trim();
    (!command.is_empty()).then_some(command)
}

/// Returns the fence opened by `line`, if any.
///
/// Any indentation is accepted so fences nested in list items count too.
fn fence_opening(line: &str) -> Option<Fence> {
    let rest = line.trim_start_matches([' ', '\t']);
    let marker = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = rest.chars().take_while(|c| *c == marker).count();
    if len < 3 {
        return None;
    }

    // Backtick fences may not carry backticks in their info string.
    if marker == '`' && rest[len..].contains('`') {
        return None;
    }

    Some(Fence { marker, len })
}

fn closes_fence(fence: Fence, line: &str) -> bool {
    let trimmed = line.trim();
    let len = trimmed.chars().take_while(|c| *c == fence.marker).count();
    len >= fence.len && trimmed.chars().all(|c| c == fence.marker)
}

/// Replaces every command block in `content` with its HTML rendering.
///
/// Text outside command blocks, including the blank line that ends a block,
/// is passed through unchanged. When a block ends at the next command line or
/// at the end of input, a newline is appended so the HTML forms a standalone
/// block for the markdown renderer.
///
/// Rewriting is idempotent: the output contains no command marker lines.
///
/// ## Examples
///
/// ```
/// use mdpage_lib::markdown::rewrite_command_blocks;
///
/// let rewrite = rewrite_command_blocks("> ls -la\nlist files\n\nDone.\n");
/// assert_eq!(rewrite.blocks.len(), 1);
/// assert_eq!(
///     rewrite.content,
///     "<div class=\"command\">ls -la</div>\n<p class=\"explanation\">list files</p>\n\nDone.\n"
/// );
/// ```
pub fn rewrite_command_blocks(content: &str) -> CommandRewrite {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let mut rewrite = CommandRewrite {
        content: String::with_capacity(content.len()),
        blocks: Vec::new(),
    };
    let mut fence: Option<Fence> = None;
    let mut idx = 0;

    while idx < lines.len() {
        let line = lines[idx];
        let bare = strip_line_ending(line);
        idx += 1;

        if let Some(open) = fence {
            if closes_fence(open, bare) {
                fence = None;
            }
            rewrite.content.push_str(line);
            continue;
        }

        if let Some(opened) = fence_opening(bare) {
            fence = Some(opened);
            rewrite.content.push_str(line);
            continue;
        }

        let Some(command) = command_text(bare) else {
            rewrite.content.push_str(line);
            continue;
        };

        let start = idx;
        while idx < lines.len() {
            let next = strip_line_ending(lines[idx]);
            if is_blank(next) || command_text(next).is_some() {
                break;
            }
            idx += 1;
        }

        let description = lines[start..idx]
            .iter()
            .map(|l| strip_line_ending(l))
            .collect::<Vec<_>>()
            .join("\n");

        let block = CommandBlock {
            command: command.to_string(),
            description: description.trim().to_string(),
        };
        rewrite.content.push_str(&block.to_html());

        let ended_by_blank = lines
            .get(idx)
            .is_some_and(|next| is_blank(strip_line_ending(next)));
        if !ended_by_blank {
            rewrite.content.push('\n');
        }

        rewrite.blocks.push(block);
    }

    rewrite
}
