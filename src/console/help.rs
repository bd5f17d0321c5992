/// Shown by the help action. The flags are descriptive only.
pub const HELP_TEXT: &str = "\
SELECT Query Parser Help:

--gui: Use the GUI interface.
--hlp: Show help information for the GUI.
--sq: Start of the SELECT query (required).

Please enter the SELECT query and press Enter to parse it.
Prefix it with 'save ' to store the result in the save file, 'exit' to quit.";
