#![allow(dead_code)]

use std::net::Ipv4Addr;
use std::str::FromStr;

use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{rdata, Name, RData, Record, RecordType};

pub fn query_message(id: u16, name: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message.set_id(id);
    message.set_message_type(MessageType::Query);
    message.set_op_code(OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(Query::query(
        Name::from_str(&fqdn(name)).expect("test name"),
        record_type,
    ));
    message
}

/// An answer mirroring the query's ID and question.
pub fn answer_message(query: &Message, answers: Vec<Record>) -> Message {
    let mut message = Message::new();
    message.set_id(query.id());
    message.set_message_type(MessageType::Response);
    message.set_op_code(OpCode::Query);
    message.set_recursion_desired(query.recursion_desired());
    message.set_recursion_available(true);
    message.add_queries(query.queries().iter().cloned());
    for answer in answers {
        message.add_answer(answer);
    }
    message
}

pub fn nxdomain_message(query: &Message) -> Message {
    let mut message = Message::new();
    message.set_id(query.id());
    message.set_message_type(MessageType::Response);
    message.set_op_code(OpCode::Query);
    message.set_response_code(ResponseCode::NXDomain);
    message.add_queries(query.queries().iter().cloned());
    message
}

pub fn a_record(name: &str, ip: Ipv4Addr) -> Record {
    Record::from_rdata(
        Name::from_str(&fqdn(name)).expect("test name"),
        60,
        RData::A(rdata::A(ip)),
    )
}

pub fn cname_record(name: &str, target: &str) -> Record {
    Record::from_rdata(
        Name::from_str(&fqdn(name)).expect("test name"),
        60,
        RData::CNAME(rdata::CNAME(
            Name::from_str(&fqdn(target)).expect("test target"),
        )),
    )
}

pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}
