// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! The server browser. `source` selects the list: local, internet, or
//! favorites, as numbered by the host.

use core::ffi::CStr;

use module_abi::Arg;

use crate::{CgameCall, CgameSyscalls};

impl CgameSyscalls<'_> {
    pub fn lan_get_ping_queue_count(&self) -> i32 {
        self.invoke(CgameCall::LanGetPingQueueCount, &[])
    }

    pub fn lan_clear_ping(&self, n: i32) {
        self.invoke(CgameCall::LanClearPing, &[Arg::int(n)])
    }

    /// Writes the address of the `n`th pinged server into `address`, and
    /// returns its ping time (zero while waiting for a reply).
    pub fn lan_get_ping(&self, n: i32, address: &mut [u8]) -> i32 {
        let mut ping_time = 0;
        self.invoke::<()>(
            CgameCall::LanGetPing,
            &[
                Arg::int(n),
                Arg::ptr_mut(address),
                Arg::len(address.len()),
                Arg::ptr_mut(&mut ping_time),
            ],
        );
        ping_time
    }

    pub fn lan_get_ping_info(&self, n: i32, info: &mut [u8]) {
        self.invoke(
            CgameCall::LanGetPingInfo,
            &[Arg::int(n), Arg::ptr_mut(info), Arg::len(info.len())],
        )
    }

    pub fn lan_get_server_count(&self, source: i32) -> i32 {
        self.invoke(CgameCall::LanGetServerCount, &[Arg::int(source)])
    }

    pub fn lan_get_server_address_string(&self, source: i32, n: i32, buffer: &mut [u8]) {
        self.invoke(
            CgameCall::LanGetServerAddressString,
            &[
                Arg::int(source),
                Arg::int(n),
                Arg::ptr_mut(buffer),
                Arg::len(buffer.len()),
            ],
        )
    }

    /// The server's info string.
    pub fn lan_get_server_info(&self, source: i32, n: i32, buffer: &mut [u8]) {
        self.invoke(
            CgameCall::LanGetServerInfo,
            &[
                Arg::int(source),
                Arg::int(n),
                Arg::ptr_mut(buffer),
                Arg::len(buffer.len()),
            ],
        )
    }

    pub fn lan_get_server_ping(&self, source: i32, n: i32) -> i32 {
        self.invoke(
            CgameCall::LanGetServerPing,
            &[Arg::int(source), Arg::int(n)],
        )
    }

    /// Requests the full status of a server, writing it into `status` once
    /// it has arrived. Returns nonzero when `status` is filled.
    pub fn lan_server_status(&self, address: &CStr, status: &mut [u8]) -> i32 {
        self.invoke(
            CgameCall::LanServerStatus,
            &[Arg::str(address), Arg::ptr_mut(status), Arg::len(status.len())],
        )
    }

    pub fn lan_save_cached_servers(&self) {
        self.invoke(CgameCall::LanSaveCachedServers, &[])
    }

    pub fn lan_load_cached_servers(&self) {
        self.invoke(CgameCall::LanLoadCachedServers, &[])
    }

    pub fn lan_reset_pings(&self, source: i32) {
        self.invoke(CgameCall::LanResetPings, &[Arg::int(source)])
    }

    /// Marks server `n` visible or hidden, or every server if `n` is -1.
    pub fn lan_mark_server_visible(&self, source: i32, n: i32, visible: bool) {
        self.invoke(
            CgameCall::LanMarkServerVisible,
            &[Arg::int(source), Arg::int(n), Arg::boolean(visible)],
        )
    }

    pub fn lan_server_is_visible(&self, source: i32, n: i32) -> bool {
        self.invoke(
            CgameCall::LanServerIsVisible,
            &[Arg::int(source), Arg::int(n)],
        )
    }

    /// Pings the visible servers that haven't been pinged yet. Returns true
    /// while there are pings in flight.
    pub fn lan_update_visible_pings(&self, source: i32) -> bool {
        self.invoke(CgameCall::LanUpdateVisiblePings, &[Arg::int(source)])
    }

    /// Returns -1 if the list is full, 0 if the server was already in it,
    /// and 1 if it was added.
    pub fn lan_add_server(&self, source: i32, name: &CStr, address: &CStr) -> i32 {
        self.invoke(
            CgameCall::LanAddServer,
            &[Arg::int(source), Arg::str(name), Arg::str(address)],
        )
    }

    pub fn lan_remove_server(&self, source: i32, address: &CStr) {
        self.invoke(
            CgameCall::LanRemoveServer,
            &[Arg::int(source), Arg::str(address)],
        )
    }

    /// Compares two servers by `sort_key`, for sorting the browser list.
    pub fn lan_compare_servers(
        &self,
        source: i32,
        sort_key: i32,
        sort_dir: i32,
        s1: i32,
        s2: i32,
    ) -> i32 {
        self.invoke(
            CgameCall::LanCompareServers,
            &[
                Arg::int(source),
                Arg::int(sort_key),
                Arg::int(sort_dir),
                Arg::int(s1),
                Arg::int(s2),
            ],
        )
    }

    pub fn lan_server_is_in_favorite_list(&self, source: i32, n: i32) -> bool {
        self.invoke(
            CgameCall::LanServerIsInFavoriteList,
            &[Arg::int(source), Arg::int(n)],
        )
    }
}

#[cfg(test)]
mod tests {
    use module_abi::{testing::RecordingGateway, Arg};

    use crate::{CgameCall, CgameSyscalls};

    #[test]
    fn server_comparisons_keep_their_argument_order() {
        let gateway = RecordingGateway::replying(-1);
        let syscalls = CgameSyscalls::new(&gateway);

        assert_eq!(-1, syscalls.lan_compare_servers(2, 4, 1, 17, 9));

        let call = gateway.last_call().unwrap();
        assert!(call.is(CgameCall::LanCompareServers));
        assert_eq!(
            [Arg::Int(2), Arg::Int(4), Arg::Int(1), Arg::Int(17), Arg::Int(9)],
            call.args.as_slice(),
        );
    }

    #[test]
    fn pings_are_written_next_to_the_address() {
        let gateway = RecordingGateway::new();
        let syscalls = CgameSyscalls::new(&gateway);
        let mut address = [0u8; 48];

        assert_eq!(0, syscalls.lan_get_ping(3, &mut address), "nothing wrote the ping");

        let call = gateway.last_call().unwrap();
        assert!(call.is(CgameCall::LanGetPing));
        assert_eq!(Arg::ptr(&address), call.args[1]);
        assert_eq!(Arg::Int(48), call.args[2]);
        assert!(matches!(call.args[3], Arg::Ptr(pointer) if !pointer.is_null()));
    }

    #[test]
    fn visibility_is_sent_and_read_as_booleans() {
        let gateway = RecordingGateway::new();
        gateway.reply_to(CgameCall::LanServerIsVisible, 1);
        let syscalls = CgameSyscalls::new(&gateway);

        syscalls.lan_mark_server_visible(0, -1, false);
        assert_eq!(Arg::Int(0), gateway.last_call().unwrap().args[2]);
        assert!(syscalls.lan_server_is_visible(0, 5));
        assert!(!syscalls.lan_update_visible_pings(0));
    }
}
