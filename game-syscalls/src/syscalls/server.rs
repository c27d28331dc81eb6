// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clients, config strings and bots.

use core::ffi::CStr;

use module_abi::{Arg, UserCmd};

use crate::{ClientList, GameCall, GameSyscalls};

impl GameSyscalls<'_> {
    /// Kicks a client, showing them `reason`.
    pub fn drop_player(&self, client: i32, reason: &CStr) {
        self.invoke(GameCall::DropPlayer, &[Arg::int(client), Arg::str(reason)])
    }

    /// Sends a reliable command to a client, or to every client if `client`
    /// is -1. `local_player` picks the player of a splitscreen client, -1 for
    /// all of them.
    pub fn send_server_command(&self, client: i32, local_player: i32, text: &CStr) {
        self.invoke(
            GameCall::SendServerCommand,
            &[Arg::int(client), Arg::int(local_player), Arg::str(text)],
        )
    }

    pub fn set_configstring(&self, index: i32, value: &CStr) {
        self.invoke(
            GameCall::SetConfigstring,
            &[Arg::int(index), Arg::str(value)],
        )
    }

    pub fn get_configstring(&self, index: i32, buffer: &mut [u8]) {
        self.invoke(
            GameCall::GetConfigstring,
            &[Arg::int(index), Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    /// Keeps the config string from being sent to the clients in `hidden_from`.
    pub fn set_configstring_restrictions(&self, index: i32, hidden_from: &ClientList) {
        self.invoke(
            GameCall::SetConfigstringRestrictions,
            &[Arg::int(index), Arg::ptr(hidden_from)],
        )
    }

    pub fn get_userinfo(&self, client: i32, buffer: &mut [u8]) {
        self.invoke(
            GameCall::GetUserinfo,
            &[Arg::int(client), Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    pub fn set_userinfo(&self, client: i32, userinfo: &CStr) {
        self.invoke(
            GameCall::SetUserinfo,
            &[Arg::int(client), Arg::str(userinfo)],
        )
    }

    pub fn get_serverinfo(&self, buffer: &mut [u8]) {
        self.invoke(
            GameCall::GetServerinfo,
            &[Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    /// The latest input of a player.
    pub fn get_usercmd(&self, player: i32, cmd: &mut UserCmd) {
        self.invoke(GameCall::GetUsercmd, &[Arg::int(player), Arg::ptr_mut(cmd)])
    }

    /// Executes `command` as if the player had sent it.
    pub fn client_command(&self, player: i32, command: &CStr) {
        self.invoke(
            GameCall::ClientCommand,
            &[Arg::int(player), Arg::str(command)],
        )
    }

    /// Reserves a client slot for a bot. Returns its number, or -1 if the
    /// server is full.
    pub fn bot_allocate_client(&self) -> i32 {
        self.invoke(GameCall::BotAllocateClient, &[])
    }

    pub fn bot_free_client(&self, client: i32) {
        self.invoke(GameCall::BotFreeClient, &[Arg::int(client)])
    }

    /// The entity number of the `sequence`th entity in the bot's latest
    /// snapshot, or -1 past the end.
    pub fn bot_get_snapshot_entity(&self, player: i32, sequence: i32) -> i32 {
        self.invoke(
            GameCall::BotGetSnapshotEntity,
            &[Arg::int(player), Arg::int(sequence)],
        )
    }

    /// Takes the next server command sent to the bot. Returns false once
    /// there are none left.
    pub fn bot_get_server_command(&self, player: i32, command: &mut [u8]) -> bool {
        let pending: i32 = self.invoke(
            GameCall::BotGetServerCommand,
            &[Arg::int(player), Arg::ptr_mut(command), Arg::len(command.len())],
        );
        pending != 0
    }

    /// Feeds input to a bot, as if its client had sent it.
    pub fn bot_user_command(&self, player: i32, cmd: &UserCmd) {
        self.invoke(GameCall::BotUserCommand, &[Arg::int(player), Arg::ptr(cmd)])
    }
}

#[cfg(test)]
mod tests {
    use module_abi::{testing::RecordingGateway, Arg};

    use crate::{ClientList, GameCall, GameSyscalls};

    #[test]
    fn broadcasts_use_negative_client_numbers() {
        let gateway = RecordingGateway::new();
        let syscalls = GameSyscalls::new(&gateway);
        syscalls.send_server_command(-1, -1, c"print \"hello\"");
        let call = gateway.last_call().unwrap();
        assert_eq!([Arg::Int(-1), Arg::Int(-1)], call.args[..2]);
    }

    #[test]
    fn restrictions_send_the_client_list() {
        let gateway = RecordingGateway::new();
        let syscalls = GameSyscalls::new(&gateway);
        let mut hidden = ClientList::default();
        hidden.insert(3);
        syscalls.set_configstring_restrictions(20, &hidden);

        let call = gateway.last_call().unwrap();
        assert!(call.is(GameCall::SetConfigstringRestrictions));
        assert_eq!(Arg::ptr(&hidden), call.args[1]);
    }

    #[test]
    fn bot_commands_run_out() {
        let gateway = RecordingGateway::replying(0);
        let syscalls = GameSyscalls::new(&gateway);
        let mut command = [0u8; 64];
        assert!(!syscalls.bot_get_server_command(2, &mut command));

        let gateway = RecordingGateway::replying(1);
        let syscalls = GameSyscalls::new(&gateway);
        assert!(syscalls.bot_get_server_command(2, &mut command));
    }
}
