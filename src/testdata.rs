//! Fixture documents shared by the module tests.

/// A small but complete GnuCash v2 document: an account tree, one customer,
/// three transactions spanning 2007-01-01 to 2012-12-28, and two scheduled
/// transactions.
pub(crate) const SAMPLE_BOOK: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<gnc-v2
     xmlns:gnc="http://www.gnucash.org/XML/gnc"
     xmlns:act="http://www.gnucash.org/XML/act"
     xmlns:book="http://www.gnucash.org/XML/book"
     xmlns:cd="http://www.gnucash.org/XML/cd"
     xmlns:cust="http://www.gnucash.org/XML/cust"
     xmlns:sx="http://www.gnucash.org/XML/sx"
     xmlns:trn="http://www.gnucash.org/XML/trn"
     xmlns:ts="http://www.gnucash.org/XML/ts"
     xmlns:recurrence="http://www.gnucash.org/XML/recurrence">
<gnc:count-data cd:type="book">1</gnc:count-data>
<gnc:book version="2.0.0">
<gnc:count-data cd:type="account">6</gnc:count-data>
<gnc:count-data cd:type="transaction">3</gnc:count-data>
<gnc:account version="2.0.0">
  <act:name>Root Account</act:name>
  <act:id type="guid">b8e54520fd5f6d14fe9efc9bba8835e5</act:id>
  <act:type>ROOT</act:type>
</gnc:account>
<gnc:account version="2.0.0">
  <act:name>Assets</act:name>
  <act:id type="guid">a1f1b3f7340b3d650cf0e34dbcbcbe5a</act:id>
  <act:type>ASSET</act:type>
  <act:description>Assets</act:description>
  <act:parent type="guid">b8e54520fd5f6d14fe9efc9bba8835e5</act:parent>
</gnc:account>
<gnc:account version="2.0.0">
  <act:name>Current Assets</act:name>
  <act:id type="guid">b3dd35cb11984b05798b6a78d04b3a46</act:id>
  <act:type>ASSET</act:type>
  <act:parent type="guid">a1f1b3f7340b3d650cf0e34dbcbcbe5a</act:parent>
</gnc:account>
<gnc:account version="2.0.0">
  <act:name>Savings Account</act:name>
  <act:id type="guid">67e6e7daadc35716eb6152769373e974</act:id>
  <act:type>BANK</act:type>
  <act:parent type="guid">b3dd35cb11984b05798b6a78d04b3a46</act:parent>
</gnc:account>
<gnc:account version="2.0.0">
  <act:name>Income</act:name>
  <act:id type="guid">9e1d32d996b0a34d8d2b47b03047bcca</act:id>
  <act:type>INCOME</act:type>
  <act:parent type="guid">b8e54520fd5f6d14fe9efc9bba8835e5</act:parent>
</gnc:account>
<gnc:account version="2.0.0">
  <act:name>Expenses</act:name>
  <act:id type="guid">facc7b74e1d14a5dbd2c4b5d2bbbd1d4</act:id>
  <act:type>EXPENSE</act:type>
  <act:parent type="guid">b8e54520fd5f6d14fe9efc9bba8835e5</act:parent>
</gnc:account>
<gnc:GncCustomer version="2.0.0">
  <cust:name>Acme Tools</cust:name>
  <cust:guid type="guid">9bb2e9d2bcd24e2ba2ecce8e92b07b1d</cust:guid>
  <cust:id>000001</cust:id>
  <cust:active>1</cust:active>
</gnc:GncCustomer>
<gnc:transaction version="2.0.0">
  <trn:id type="guid">8c5e58ad64b0a3f4a6bb315c5a2e1f4d</trn:id>
  <trn:date-posted>
    <ts:date>2007-01-01 00:00:00 -0500</ts:date>
  </trn:date-posted>
  <trn:date-entered>
    <ts:date>2007-01-02 09:15:00 -0500</ts:date>
  </trn:date-entered>
  <trn:description>Opening Balance</trn:description>
</gnc:transaction>
<gnc:transaction version="2.0.0">
  <trn:id type="guid">17c3a8e6ba1ffcbe6fd0d5a9c21e5a3b</trn:id>
  <trn:date-posted>
    <ts:date>2010-06-15 00:00:00 -0500</ts:date>
  </trn:date-posted>
  <trn:date-entered>
    <ts:date>2010-06-15 18:40:12 -0500</ts:date>
  </trn:date-entered>
  <trn:description>Groceries</trn:description>
</gnc:transaction>
<gnc:transaction version="2.0.0">
  <trn:id type="guid">5bbdfed93e0a82f4ad8da65021498e0a</trn:id>
  <trn:date-posted>
    <ts:date>2012-12-28 00:00:00 -0600</ts:date>
  </trn:date-posted>
  <trn:date-entered>
    <ts:date>2012-12-30 08:11:30 -0600</ts:date>
  </trn:date-entered>
  <trn:description>Interest payment</trn:description>
</gnc:transaction>
<gnc:schedxaction version="2.0.0">
  <sx:id type="guid">209bbfc1c91cb6bf4abe2ed26e11fcf2</sx:id>
  <sx:name>ABC Corporation</sx:name>
  <sx:enabled>y</sx:enabled>
  <sx:autoCreate>n</sx:autoCreate>
  <sx:autoCreateNotify>n</sx:autoCreateNotify>
  <sx:advanceCreateDays>0</sx:advanceCreateDays>
  <sx:advanceRemindDays>0</sx:advanceRemindDays>
  <sx:instanceCount>130</sx:instanceCount>
  <sx:start>
    <gdate>2007-01-12</gdate>
  </sx:start>
  <sx:last>
    <gdate>2009-06-26</gdate>
  </sx:last>
  <sx:end>
    <gdate>2009-06-30</gdate>
  </sx:end>
  <sx:templ-acct type="guid">23bea6468ee7b4acb4db4b3f54598a71</sx:templ-acct>
  <sx:schedule>
    <gnc:recurrence version="1.0.0">
      <recurrence:mult>1</recurrence:mult>
      <recurrence:period_type>week</recurrence:period_type>
      <recurrence:start>
        <gdate>2007-01-12</gdate>
      </recurrence:start>
    </gnc:recurrence>
  </sx:schedule>
</gnc:schedxaction>
<gnc:schedxaction version="2.0.0">
  <sx:id type="guid">4ece5cb8c4907e1de5aa7835faa2b603</sx:id>
  <sx:name>XYZ Company</sx:name>
  <sx:enabled>y</sx:enabled>
  <sx:autoCreate>n</sx:autoCreate>
  <sx:autoCreateNotify>n</sx:autoCreateNotify>
  <sx:advanceCreateDays>0</sx:advanceCreateDays>
  <sx:advanceRemindDays>0</sx:advanceRemindDays>
  <sx:instanceCount>52</sx:instanceCount>
  <sx:start>
    <gdate>2009-07-10</gdate>
  </sx:start>
  <sx:last>
    <gdate>2013-08-01</gdate>
  </sx:last>
  <sx:end>
    <gdate>2013-08-11</gdate>
  </sx:end>
  <sx:templ-acct type="guid">52b74e7ef97f7d3bd7c36c56ba72b0b5</sx:templ-acct>
  <sx:schedule>
    <gnc:recurrence version="1.0.0">
      <recurrence:mult>1</recurrence:mult>
      <recurrence:period_type>month</recurrence:period_type>
      <recurrence:start>
        <gdate>2009-07-10</gdate>
      </recurrence:start>
    </gnc:recurrence>
  </sx:schedule>
</gnc:schedxaction>
</gnc:book>
</gnc-v2>
"#;

/// A book holding accounts only. With no transactions, the date range stays
/// unset.
pub(crate) const NO_TRANSACTIONS: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<gnc-v2
     xmlns:gnc="http://www.gnucash.org/XML/gnc"
     xmlns:act="http://www.gnucash.org/XML/act">
<gnc:book version="2.0.0">
<gnc:account version="2.0.0">
  <act:name>Root Account</act:name>
  <act:id type="guid">c0a0000000000000000000000000000a</act:id>
  <act:type>ROOT</act:type>
</gnc:account>
<gnc:account version="2.0.0">
  <act:name>Equity</act:name>
  <act:id type="guid">c0a0000000000000000000000000000b</act:id>
  <act:type>EQUITY</act:type>
  <act:parent type="guid">c0a0000000000000000000000000000a</act:parent>
</gnc:account>
</gnc:book>
</gnc-v2>
"#;
