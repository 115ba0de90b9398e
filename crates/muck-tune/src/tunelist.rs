//! The server's parameter table
//!
//! Every runtime-tunable parameter with its group, label, access levels and
//! compiled-in default. Parameter names must never start with `%`.

use crate::entry::TuneDef;
use crate::prelude::*;

use muck_types::types::MuckerLevel::{God, Wizard};

const ROOM: TypeRestriction = TypeRestriction::Only(ObjectKind::Room);
const PLAYER: TypeRestriction = TypeRestriction::Only(ObjectKind::Player);

pub const TUNE_TABLE: &[TuneDef] = &[
	// Strings
	TuneDef::string("Commands", "autolook_cmd", "Room entry look command", "look"),
	TuneDef::string("Currency", "cpennies", "Currency name, capitalized, plural", "Pennies"),
	TuneDef::string("Currency", "cpenny", "Currency name, capitalized", "Penny"),
	TuneDef::string("Currency", "pennies", "Currency name, plural", "pennies"),
	TuneDef::string("Currency", "penny", "Currency name", "penny"),
	TuneDef::string("Misc", "description_default", "Default description for new objects", "You see nothing special."),
	TuneDef::string("DB Dumps", "dumping_mesg", "Database dump warning message", "## Pausing to save database. This may take a while. ##"),
	TuneDef::string("DB Dumps", "dumpdone_mesg", "Database dump completion message", "## Save complete. ##"),
	TuneDef::string("DB Dumps", "dumpwarn_mesg", "Database dump advance warning message", "## Game will pause to save the database in a few minutes. ##"),
	TuneDef::string("Files", "file_connection_help", "Connection screen help file", "data/connect-help.txt").read(Wizard).write(God),
	TuneDef::string("Files", "file_credits", "Credits file", "data/credits.txt").read(Wizard).write(God),
	TuneDef::string("Files", "file_editor_help", "Editor help file", "data/edit-help.txt").read(Wizard).write(God),
	TuneDef::string("Files", "file_help", "Help file", "data/help.txt").read(Wizard).write(God),
	TuneDef::string("Files", "file_help_dir", "Help topic directory", "data/help").read(Wizard).write(God),
	TuneDef::string("Files", "file_info_dir", "Info topic directory", "data/info/").read(Wizard).write(God),
	TuneDef::string("Files", "file_log_cmd_times", "Command timing log", "logs/cmd-times").read(Wizard).write(God),
	TuneDef::string("Files", "file_log_commands", "Command log", "logs/commands").read(Wizard).write(God),
	TuneDef::string("Files", "file_log_gripes", "Gripe log", "logs/gripes").read(Wizard).write(God),
	TuneDef::string("Files", "file_log_malloc", "Memory allocation log", "logs/malloc").read(Wizard).write(God),
	TuneDef::string("Files", "file_log_muf_errors", "MUF error log", "logs/muf-errors").read(Wizard).write(God),
	TuneDef::string("Files", "file_log_programs", "Program edit log", "logs/programs").read(Wizard).write(God),
	TuneDef::string("Files", "file_log_sanfix", "Sanity fix log", "logs/sanfixed").read(Wizard).write(God),
	TuneDef::string("Files", "file_log_sanity", "Sanity check log", "logs/sanity").read(Wizard).write(God),
	TuneDef::string("Files", "file_log_status", "Status log", "logs/status").read(Wizard).write(God),
	TuneDef::string("Files", "file_log_stderr", "Standard error log", "logs/stderr").read(Wizard).write(God),
	TuneDef::string("Files", "file_log_stdout", "Standard output log", "logs/stdout").read(Wizard).write(God),
	TuneDef::string("Files", "file_log_user", "User program log", "logs/user").read(Wizard).write(God),
	TuneDef::string("Files", "file_man", "MUF manual file", "data/man.txt").read(Wizard).write(God),
	TuneDef::string("Files", "file_man_dir", "MUF manual directory", "data/man").read(Wizard).write(God),
	TuneDef::string("Files", "file_mpihelp", "MPI help file", "data/mpihelp.txt").read(Wizard).write(God),
	TuneDef::string("Files", "file_mpihelp_dir", "MPI help directory", "data/mpihelp").read(Wizard).write(God),
	TuneDef::string("Files", "file_motd", "Message of the day file", "data/motd.txt").read(Wizard).write(God),
	TuneDef::string("Files", "file_news", "News file", "data/news.txt").read(Wizard).write(God),
	TuneDef::string("Files", "file_news_dir", "News topic directory", "data/news").read(Wizard).write(God),
	TuneDef::string("Files", "file_sysparms", "System parameter help file", "data/sysparms.txt").read(Wizard).write(God),
	TuneDef::string("Files", "file_parameters", "Tunable parameter file", "data/parmfile.cfg").read(Wizard).write(God),
	TuneDef::string("Files", "file_welcome_screen", "Welcome screen file", "data/welcome.txt").read(Wizard).write(God),
	TuneDef::string("Properties", "gender_prop", "Property holding object gender", "sex"),
	TuneDef::string("Commands", "huh_mesg", "Unrecognized command message", "Huh?  (Type \"help\" for help.)"),
	TuneDef::string("Idle Boot", "idle_mesg", "Idle boot message", "Autodisconnecting for inactivity."),
	TuneDef::string("Connecting", "leave_mesg", "Logoff message", "Come back later!"),
	TuneDef::string("Misc", "muckname", "MUCK name", "TinyMUCK"),
	TuneDef::string("Registration", "pcreate_flags", "Flags given to new players", "B"),
	TuneDef::string("Player Max", "playermax_bootmesg", "Max player connection refusal message", "Sorry, but there are too many players online.  Please try reconnecting in a few minutes."),
	TuneDef::string("Player Max", "playermax_warnmesg", "Max player connection warning message", "You likely won't be able to connect right now, since too many players are online."),
	TuneDef::string("Registration", "register_mesg", "Login registration denied message", "Sorry, you can get a character by e-mailing the MUCK administrators with a charname and password."),
	TuneDef::string("Registration", "reserved_names", "Name pattern reserved for non-players", ""),
	TuneDef::string("Registration", "reserved_player_names", "Name pattern reserved for players", ""),
	TuneDef::string("SSL", "ssl_cert_file", "Certificate file", "data/server.pem").read(Wizard).write(God).module("ssl"),
	TuneDef::string("SSL", "ssl_key_file", "Private key file", "data/server.pem").read(Wizard).write(God).module("ssl"),
	TuneDef::null_string("SSL", "ssl_keyfile_passwd", "Private key password").read(God).write(God).module("ssl"),
	TuneDef::string("SSL", "ssl_cipher_preference_list", "Allowed cipher list", "HIGH:!DSS:!aNULL@STRENGTH").read(Wizard).write(God).module("ssl"),
	TuneDef::string("SSL", "ssl_min_protocol_version", "Minimum allowed protocol version", "None").read(Wizard).write(God).module("ssl"),
	// Timespans
	TuneDef::timespan("Tuning", "aging_time", "When to consider an object old and unused", 90 * 24 * 60 * 60),
	TuneDef::timespan("Tuning", "clean_interval", "Interval between unused object purges", 15 * 60),
	TuneDef::timespan("DB Dumps", "dump_interval", "Interval between database dumps", 15 * 60),
	TuneDef::timespan("DB Dumps", "dump_warntime", "Warning time before a dump", 2 * 60),
	TuneDef::timespan("Idle Boot", "idle_ping_time", "Interval between idle pings", 55),
	TuneDef::timespan("Idle Boot", "maxidle", "Maximum idle time before booting", 2 * 60 * 60),
	TuneDef::timespan("Misc", "pname_history_threshold", "Length of player name history", 30 * 24 * 60 * 60),
	// Integers
	TuneDef::integer("MUF", "addpennies_muf_mlev", "MUCKER level required to create/destroy pennies", 2),
	TuneDef::integer("Logging", "cmd_log_threshold_msec", "Log commands that take longer than this (ms)", 1000),
	TuneDef::integer("Spam Limits", "commands_per_time", "Commands allowed per time period", 2),
	TuneDef::integer("Spam Limits", "command_burst_size", "Maximum commands per burst", 500),
	TuneDef::integer("Spam Limits", "command_time_msec", "Command time period (ms)", 1000),
	TuneDef::integer("Costs", "exit_cost", "Cost to create an exit", 1),
	TuneDef::integer("MUF", "free_frames_pool", "Number of preallocated program frames", 8),
	TuneDef::integer("MUF", "instr_slice", "Instructions run per timeslice", 2000),
	TuneDef::integer("Killing", "kill_base_cost", "Cost to guarantee a kill", 100),
	TuneDef::integer("Killing", "kill_bonus", "Bonus given to a killed player", 50),
	TuneDef::integer("Killing", "kill_min_cost", "Minimum cost to attempt a kill", 10),
	TuneDef::integer("Costs", "link_cost", "Cost to link an exit", 1),
	TuneDef::integer("MUF", "listen_mlev", "MUCKER level required for listener programs", 3),
	TuneDef::integer("Costs", "lookup_cost", "Cost to look up a player", 0),
	TuneDef::integer("MUF", "max_force_level", "Maximum number of forces processed within a command", 1).write(God),
	TuneDef::integer("MUF", "max_instr_count", "Maximum MUF preempt instruction run length", 20000),
	TuneDef::integer("Tuning", "max_loaded_objs", "Percentage of the database to keep loaded", 5),
	TuneDef::integer("MUF", "max_ml4_preempt_count", "Maximum MUCKER level 4 preempt instruction run length", 0),
	TuneDef::integer("MUF", "max_ml4_nested_interp_loop_count", "Maximum MUCKER level 4 nested interpreter loops", 0),
	TuneDef::integer("MUF", "max_nested_interp_loop_count", "Maximum nested interpreter loops", 16),
	TuneDef::integer("MUF", "max_plyr_processes", "Concurrent processes allowed per player", 400),
	TuneDef::integer("MUF", "max_process_limit", "Total concurrent processes allowed on the system", 400),
	TuneDef::integer("Currency", "max_object_endowment", "Maximum value of an object", 100),
	TuneDef::integer("Spam Limits", "max_output", "Maximum output buffer size", 131_071),
	TuneDef::integer("Currency", "max_pennies", "Player currency cap", 10000),
	TuneDef::integer("MUF", "mcp_muf_mlev", "MUCKER level required to use MCP", 3),
	TuneDef::integer("MUF", "movepennies_muf_mlev", "MUCKER level required to move pennies non-destructively", 2),
	TuneDef::integer("MPI", "mpi_max_commands", "Maximum number of MPI commands per execution", 2048),
	TuneDef::integer("Costs", "object_cost", "Cost to create an object", 10),
	TuneDef::integer("MUF", "pause_min", "Minimum time between MUF timeslices (ms)", 0),
	TuneDef::integer("MUF", "pennies_muf_mlev", "MUCKER level required to read the value of pennies", 1),
	TuneDef::integer("Currency", "penny_rate", "Moves between finding currency, on average", 8),
	TuneDef::integer("Misc", "player_name_limit", "Maximum length of a player name", 16),
	TuneDef::integer("Player Max", "playermax_limit", "Maximum allowed connections", 56),
	TuneDef::integer("MUF", "process_timer_limit", "Maximum timers per process", 4),
	TuneDef::integer("Costs", "room_cost", "Cost to create a room", 10),
	TuneDef::integer("Currency", "start_pennies", "Starting currency of new players", 50),
	TuneDef::integer("MUF", "userlog_mlev", "MUCKER level required to write to the user log", 3),
	// Object references
	TuneDef::dbref("Database", "default_room_parent", "Place to parent new rooms to", Dbref(0), ROOM),
	TuneDef::dbref("Database", "lost_and_found", "Place for things without a home", Dbref(0), ROOM),
	TuneDef::dbref("Database", "player_start", "Place where new players start", Dbref(0), ROOM),
	TuneDef::dbref("Database", "toad_default_recipient", "Default owner of objects of toaded players", Dbref(1), PLAYER),
	// Booleans
	TuneDef::boolean("Encoding", "7bit_other_names", "Limit exit/room/muf names to 7-bit characters", false),
	TuneDef::boolean("Encoding", "7bit_thing_names", "Limit thing names to 7-bit characters", false),
	TuneDef::boolean("Movement", "allow_home", "Allow the 'home' command", true),
	TuneDef::boolean("Commands", "autolink_actions", "Automatically link @actions to NIL", false),
	TuneDef::boolean("SSL", "cipher_server_preference", "Honor the server cipher preference order", true).module("ssl"),
	TuneDef::boolean("MUF", "compatible_priorities", "Use legacy exit priority levels on things", true),
	TuneDef::boolean("MUF", "consistent_lock_source", "Maintain trigger as lock source in TESTLOCK", true),
	TuneDef::boolean("Movement", "dark_sleepers", "Make sleeping players dark", false),
	TuneDef::boolean("DB Dumps", "dbdump_warning", "Warn before database dumps", true),
	TuneDef::boolean("Tuning", "diskbase_propvals", "Load property values from disk on demand", true).write(God),
	TuneDef::boolean("MPI", "do_mpi_parsing", "Parse MPI strings in messages", true),
	TuneDef::boolean("DB Dumps", "dumpdone_warning", "Notify when a database dump completes", true),
	TuneDef::boolean("Commands", "enable_match_yield", "Enable yield/overt flags on rooms and things", true),
	TuneDef::boolean("Commands", "enable_prefix", "Enable prefix actions", true),
	TuneDef::boolean("Movement", "exit_darking", "Allow players to set exits dark", true),
	TuneDef::boolean("MUF", "expanded_debug", "Expand stack traces in debug output", true),
	TuneDef::boolean("Commands", "force_mlev1_name_notify", "Prefix notifies from MUCKER level 1 programs with the owner name", true),
	TuneDef::boolean("Connecting", "hostnames", "Resolve IP addresses into hostnames", true),
	TuneDef::boolean("Idle Boot", "idleboot", "Disconnect idle players", true),
	TuneDef::boolean("Idle Boot", "idle_ping_enable", "Send keepalive pings to idle connections", true),
	TuneDef::boolean("Commands", "ignore_bidirectional", "Ignore works in both directions", true),
	TuneDef::boolean("Commands", "ignore_support", "Enable support for @ignoring players", true),
	TuneDef::boolean("Listeners", "listeners", "Enable programs that listen to speech", true),
	TuneDef::boolean("Listeners", "listeners_env", "Listeners are triggered from the environment", true),
	TuneDef::boolean("Listeners", "listeners_obj", "Listeners may be on non-room objects", true),
	TuneDef::boolean("MUF", "lock_envcheck", "Locks check environment for properties", false),
	TuneDef::boolean("Logging", "log_commands", "Log player commands", true).read(Wizard),
	TuneDef::boolean("Logging", "log_failed_commands", "Log unrecognized commands", false).read(Wizard),
	TuneDef::boolean("Logging", "log_interactive", "Log text sent to MUF", true).read(Wizard),
	TuneDef::boolean("Logging", "log_programs", "Log programs every time they are saved", true).read(Wizard),
	TuneDef::boolean("Commands", "m3_huh", "Enable huh? to call an exit named \"huh?\" and set M3", false),
	TuneDef::boolean("MUF", "muf_comments_strict", "MUF comments are strict and not recursive", true),
	TuneDef::boolean("MUF", "optimize_muf", "Enable MUF bytecode optimizer", true),
	TuneDef::boolean("MUF", "periodic_program_purge", "Periodically free unused programs", true),
	TuneDef::boolean("Player Max", "playermax", "Limit number of concurrent players allowed", false).write(God),
	TuneDef::boolean("Misc", "pname_history_reporting", "Report player name change history", true),
	TuneDef::boolean("Movement", "quiet_moves", "Suppress basic arrive and depart notifications", false),
	TuneDef::boolean("Misc", "realms_control", "Enable realm wizard controls", false),
	TuneDef::boolean("Commands", "recognize_null_command", "Recognize the null command", false),
	TuneDef::boolean("Registration", "registration", "Require new players to register manually", true),
	TuneDef::boolean("Commands", "tab_input_replaced_with_space", "Replace tabs in input with spaces", true),
	TuneDef::boolean("Killing", "restrict_kill", "Restrict kill command to players set Kill_OK", true),
	TuneDef::boolean("Movement", "secure_teleport", "Restrict actions to Jump_OK or controlled rooms", false),
	TuneDef::boolean("Misc", "secure_who", "Disallow WHO command from the login screen", false),
	TuneDef::boolean("Properties", "show_legacy_props", "Examine shows legacy props", false),
	TuneDef::boolean("SSL", "starttls_allow", "Enable STARTTLS on plain connections", false).module("ssl"),
	TuneDef::boolean("Misc", "strict_god_priv", "Only God can touch God's objects", true).write(God),
	TuneDef::boolean("Movement", "teleport_to_player", "Allow using exits linked to players", true),
	TuneDef::boolean("Movement", "thing_darking", "Allow players to set things dark", true),
	TuneDef::boolean("Movement", "thing_movement", "Objects obey exit locks and notify on move", false),
	TuneDef::boolean("Misc", "toad_recycle", "Recycle a toaded player's objects", false),
	TuneDef::boolean("Commands", "verbose_clone", "Verbose @clone command", false),
	TuneDef::boolean("Commands", "verbose_examine", "Show more information when examining objects", true),
	TuneDef::boolean("Misc", "who_hides_dark", "Hide dark players from WHO", true),
	TuneDef::boolean("Movement", "wiz_vehicles", "Only wizards may set the vehicle flag", false),
	TuneDef::boolean("Misc", "zombies", "Enable zombie things to relay what they hear", true),
];


// vim: ts=4
