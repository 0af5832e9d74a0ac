pub const HELP: &str = "
\u{001b}[1;4;35mAll The Ponies\u{001b}[0m
Name as many ponies as you can. Names are matched as you type them, nicknames count too.

\u{001b}[1;4;35mCommands:\u{001b}[0m
\u{001b}[1;34m!start\u{001b}[0m - Start a new round (resets your list).
\u{001b}[1;34m!stop\u{001b}[0m - Stop the current round.
\u{001b}[1;34m!lang <code>\u{001b}[0m - Switch language, e.g. !lang french. Not while a round is running.
\u{001b}[1;34m!search <text>\u{001b}[0m - Find ponies whose name or id contains the text.
\u{001b}[1;34m!pony <id>\u{001b}[0m - Show a pony's profile.
\u{001b}[1;34m!options\u{001b}[0m - List matching options.
\u{001b}[1;34m!option <name> <on|off>\u{001b}[0m - Change a matching option. Not while a round is running.
\u{001b}[1;34m!help\u{001b}[0m - Show this message.
\u{001b}[1;34m!quit\u{001b}[0m - Leave.
";
