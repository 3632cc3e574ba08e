pub fn get_help_text() -> &'static str {
    r#"
╔════════════════════════════════════════════════════════════════╗
║                 gh-search - Repository Search                  ║
║                       Keyboard Shortcuts                       ║
╚════════════════════════════════════════════════════════════════╝

NAVIGATION
  ↑ / Ctrl+P         Move up in the list
  ↓ / Ctrl+N         Move down in the list
  PgUp / PgDn        Move by one page

SELECTION
  ENTER              Choose the highlighted repository
  ESC / Ctrl+C       Cancel and exit

FILTER
  Type characters    Narrow the results (fuzzy match)
  Backspace          Delete last character from the filter

LAYOUT
  Alt+O              Preview below the list
  Alt+V              Preview beside the list

HELP
  ?                  Show/hide this help screen

───────────────────────────────────────────────────────────────────

TIPS
  • Results keep their original numbers while filtered
  • The preview shows the full description and web address

"#
}
