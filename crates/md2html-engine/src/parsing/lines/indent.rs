/// Width of a tab when measuring indentation.
pub const TAB_WIDTH: usize = 4;

/// Returns the indentation depth of `line`: each leading space counts 1,
/// each leading tab counts [`TAB_WIDTH`].
pub fn indent_depth(line: &str) -> usize {
    line.bytes()
        .map_while(|b| match b {
            b' ' => Some(1),
            b'\t' => Some(TAB_WIDTH),
            _ => None,
        })
        .sum()
}

/// Removes leading whitespace from `line` up to `depth` columns.
///
/// A tab that would overshoot `depth` is kept, so relative indentation
/// beyond the stripped prefix survives.
pub fn strip_indent(line: &str, depth: usize) -> &str {
    let mut width = 0;
    let mut idx = 0;
    for b in line.bytes() {
        let w = match b {
            b' ' => 1,
            b'\t' => TAB_WIDTH,
            _ => break,
        };
        if width + w > depth {
            break;
        }
        width += w;
        idx += 1;
    }
    &line[idx..]
}
