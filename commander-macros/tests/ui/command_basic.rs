use commander_application::command::Command;
use commander_macros::Command;

// 默认名称：模块路径 + 类型名，输出为 ()
#[derive(Command)]
struct PingCommand;

// 自定义名称与泛型输出类型
#[derive(Command)]
#[command(name = r"Acme\Users\RegisterUserCommand", output = Vec<String>)]
struct RegisterUserCommand {
    username: String,
    email: String,
}

fn takes_output<C: Command<Output = Vec<String>>>(_cmd: &C) {}

fn main() {
    assert!(PingCommand::NAME.ends_with("::PingCommand"));
    assert_eq!(RegisterUserCommand::NAME, r"Acme\Users\RegisterUserCommand");

    let cmd = RegisterUserCommand {
        username: "alice".into(),
        email: "alice@example.com".into(),
    };
    takes_output(&cmd);
    let _ = (cmd.username, cmd.email);
}
